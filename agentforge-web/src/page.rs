//! Embedded form page for the web shell.
//!
//! Single page, no build step. The form mirrors the console wizard's
//! sections and posts the same specification mapping to the JSON API.

pub(crate) const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>LLM Agent Generation Engine</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: #f4f5f7;
            color: #1f2430;
            line-height: 1.5;
        }

        .container { max-width: 780px; margin: 0 auto; padding: 2rem 1rem 4rem; }

        header { text-align: center; margin-bottom: 2rem; }
        h1 { font-size: 1.8rem; }
        .subtitle { color: #5a6270; margin-top: 0.25rem; }

        section {
            background: #fff;
            border: 1px solid #dde1e8;
            border-radius: 8px;
            padding: 1.25rem;
            margin-bottom: 1rem;
        }
        h2 { font-size: 1.05rem; margin-bottom: 0.75rem; }

        label { display: block; font-size: 0.9rem; margin: 0.6rem 0 0.2rem; }
        input[type=text], input[type=password], textarea, select {
            width: 100%;
            padding: 0.45rem 0.6rem;
            border: 1px solid #c3c9d4;
            border-radius: 5px;
            font: inherit;
        }
        textarea { min-height: 4.5rem; resize: vertical; }

        .caps label { display: flex; gap: 0.5rem; align-items: center; margin: 0.3rem 0; }
        .caps input { width: auto; }

        button {
            font: inherit;
            padding: 0.55rem 1.4rem;
            border: none;
            border-radius: 6px;
            background: #3b5bdb;
            color: #fff;
            cursor: pointer;
        }
        button:disabled { background: #aab2c0; cursor: default; }
        button.secondary { background: #2f9e44; }

        .actions { display: flex; gap: 0.75rem; align-items: center; }
        #status { font-size: 0.9rem; color: #5a6270; }
        #status.error { color: #c92a2a; }

        #result { display: none; }
        #result-framework { font-weight: 600; }
        pre {
            background: #1f2430;
            color: #e8ecf3;
            padding: 1rem;
            border-radius: 6px;
            overflow-x: auto;
            font-size: 0.85rem;
            margin-top: 0.5rem;
        }

        footer { text-align: center; color: #8a91a0; font-size: 0.8rem; margin-top: 2rem; }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>LLM Agent Generation Engine</h1>
            <div class="subtitle">Create a custom LLM agent with adapters for popular frameworks</div>
        </header>

        <section>
            <h2>1. Basic Information</h2>
            <label for="name">Agent Name</label>
            <input type="text" id="name" placeholder="A descriptive name for your agent">
            <label for="description">Agent Description</label>
            <textarea id="description" placeholder="A detailed description of what your agent does"></textarea>
            <label for="language">Programming Language</label>
            <select id="language">
                <option value="python">python</option>
                <option value="javascript">javascript</option>
            </select>
        </section>

        <section>
            <h2>2. Framework Selection</h2>
            <label for="framework">Framework</label>
            <select id="framework">
                <option value="auto">Auto-select based on requirements</option>
            </select>
        </section>

        <section>
            <h2>3. Agent Capabilities</h2>
            <div class="caps">
                <label><input type="checkbox" class="cap" value="document_retrieval"> Document Retrieval</label>
                <label><input type="checkbox" class="cap" value="question_answering"> Question Answering</label>
                <label><input type="checkbox" class="cap" value="web_browsing"> Web Browsing</label>
                <label><input type="checkbox" class="cap" value="tool_usage"> Tool Usage</label>
                <label><input type="checkbox" class="cap" value="memory_retention"> Memory/Context Retention</label>
                <label><input type="checkbox" class="cap" value="chain_of_thought"> Chain-of-Thought Reasoning</label>
            </div>
            <label for="custom_capability">Custom Capability (optional)</label>
            <input type="text" id="custom_capability">
        </section>

        <section>
            <h2>4. Use Case</h2>
            <label for="use_case">Use Case Description</label>
            <textarea id="use_case" placeholder="A detailed description of how your agent will be used"></textarea>
        </section>

        <section>
            <h2>5. Advanced Options</h2>
            <label for="model">LLM Model</label>
            <select id="model">
                <option value="gpt-4">gpt-4</option>
                <option value="gpt-3.5-turbo">gpt-3.5-turbo</option>
                <option value="claude-2">claude-2</option>
                <option value="claude-instant">claude-instant</option>
            </select>
            <label for="custom_requirements">Custom Requirements (optional)</label>
            <textarea id="custom_requirements"></textarea>
            <label for="openai_key">OpenAI API Key (optional)</label>
            <input type="password" id="openai_key">
            <label for="anthropic_key">Anthropic API Key (optional)</label>
            <input type="password" id="anthropic_key">
        </section>

        <section>
            <h2>6. Generate Agent</h2>
            <div class="actions">
                <button id="generate" onclick="generateAgent()">Generate Agent</button>
                <button id="save" class="secondary" onclick="saveAgent()" disabled>Save Agent</button>
                <span id="status"></span>
            </div>
            <div id="result">
                <p style="margin-top: 1rem">Framework: <span id="result-framework"></span></p>
                <pre><code id="result-code"></code></pre>
            </div>
        </section>

        <footer>&copy; 2025 LLM Agent Generation Engine</footer>
    </div>

    <script>
        let generated = null;

        function val(id) {
            return document.getElementById(id).value;
        }

        function setStatus(message, isError) {
            const status = document.getElementById('status');
            status.textContent = message;
            status.className = isError ? 'error' : '';
        }

        function buildSpec() {
            const spec = {
                name: val('name'),
                description: val('description'),
                language: val('language'),
                use_case: val('use_case'),
                model: val('model'),
            };
            const framework = val('framework');
            if (framework !== 'auto') {
                spec.framework = framework;
            }
            const capabilities = Array.from(
                document.querySelectorAll('.cap:checked'), (box) => box.value);
            const custom = val('custom_capability').trim();
            if (custom) {
                capabilities.push(custom);
            }
            spec.capabilities = capabilities;
            const requirements = val('custom_requirements').trim();
            if (requirements) {
                spec.custom_requirements = requirements;
            }
            const apiKeys = {};
            if (val('openai_key')) { apiKeys.openai = val('openai_key'); }
            if (val('anthropic_key')) { apiKeys.anthropic = val('anthropic_key'); }
            spec.api_keys = apiKeys;
            return spec;
        }

        async function loadFrameworks() {
            const resp = await fetch('/api/frameworks');
            const data = await resp.json();
            const select = document.getElementById('framework');
            for (const fw of data.frameworks) {
                const option = document.createElement('option');
                option.value = fw.id;
                option.textContent = fw.name + ' - ' + fw.tagline;
                select.appendChild(option);
            }
        }

        async function generateAgent() {
            setStatus('Generating agent code...');
            document.getElementById('generate').disabled = true;
            try {
                const resp = await fetch('/api/generate', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(buildSpec()),
                });
                const data = await resp.json();
                if (!resp.ok) {
                    setStatus('Error generating agent: ' + data.error, true);
                    return;
                }
                generated = data;
                document.getElementById('result-framework').textContent = data.framework;
                document.getElementById('result-code').textContent = data.code;
                document.getElementById('result').style.display = 'block';
                document.getElementById('save').disabled = false;
                setStatus('Agent generated successfully!');
            } finally {
                document.getElementById('generate').disabled = false;
            }
        }

        async function saveAgent() {
            if (!generated) { return; }
            setStatus('Saving agent...');
            const resp = await fetch('/api/save', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(generated),
            });
            const data = await resp.json();
            if (!resp.ok) {
                setStatus('Error saving agent: ' + data.error, true);
                return;
            }
            setStatus('Agent saved to: ' + data.saved_to);
        }

        loadFrameworks();
    </script>
</body>
</html>
"##;
