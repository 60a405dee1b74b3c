//! Interactive console wizard
//!
//! Walks the user through the same sections as the web form (basic info,
//! framework, capabilities, use case, advanced options), assembles the
//! specification, then generates and saves the agent bundle.

use std::io::{self, Write};
use std::path::PathBuf;

use agentforge_core::error::{self, Result};
use agentforge_core::{AgentSpec, Framework};
use agentforge_engine::{unique_output_dir, Engine};
use serde_json::{Map, Value};

/// Tags behind the numbered capability menu, in menu order.
const CAPABILITY_TAGS: [&str; 6] = [
    "document_retrieval",
    "question_answering",
    "web_browsing",
    "tool_usage",
    "memory_retention",
    "chain_of_thought",
];

/// Run the wizard end to end: collect, generate, save.
pub async fn run(model: &str) -> Result<()> {
    let engine = Engine::for_model(model)?;

    println!("{}", "=".repeat(50));
    println!("LLM Agent Generation Engine - CLI");
    println!("{}", "=".repeat(50));
    println!("\nWelcome! Let's create a custom LLM agent.");

    let specifications = collect_specifications()?;

    println!("\nGenerating agent code...");
    let agent = engine.generate_agent(&specifications).await?;

    let output_dir = output_directory()?;
    let saved_path = engine.save_agent(&agent, &output_dir)?;

    println!(
        "\nAgent successfully generated and saved to: {}",
        saved_path.display()
    );
    println!("\nYou can now use your agent by following the instructions in the README.md file.");

    Ok(())
}

fn collect_specifications() -> Result<AgentSpec> {
    let mut specifications = AgentSpec::new();

    println!("\n--- Basic Information ---");
    specifications.insert("name", prompt("Agent name: ")?);
    specifications.insert("description", prompt("Agent description: ")?);
    let language = select_option("Programming language", &["python", "javascript"], "python")?;
    specifications.insert("language", language);

    println!("\n--- Framework Selection ---");
    println!("Available frameworks:");
    for (i, framework) in Framework::ALL.iter().enumerate() {
        println!(
            "{}. {} - {}",
            i + 1,
            framework.display_name(),
            framework.tagline()
        );
    }
    println!("5. Auto-select based on requirements");

    let framework_choice = prompt("Select a framework (1-5, default: 5): ")?;
    // Choices past the catalog (auto-select included) leave the key absent.
    if let Ok(index) = framework_choice.trim().parse::<usize>() {
        if (1..=Framework::ALL.len()).contains(&index) {
            specifications.insert("framework", Framework::ALL[index - 1].as_str());
        }
    }

    println!("\n--- Agent Capabilities ---");
    let mut capabilities: Vec<String> = Vec::new();
    println!("Select agent capabilities (comma-separated numbers):");
    println!("1. Document retrieval");
    println!("2. Question answering");
    println!("3. Web browsing");
    println!("4. Tool usage");
    println!("5. Memory/context retention");
    println!("6. Chain-of-thought reasoning");
    println!("7. Custom capability");

    let capability_choices = prompt("Capabilities (e.g., 1,3,4): ")?;
    for choice in capability_choices.split(',') {
        let choice = choice.trim();
        if choice == "7" {
            let custom = prompt("Enter custom capability: ")?;
            capabilities.push(custom.trim().to_string());
        } else if let Ok(index) = choice.parse::<usize>() {
            if (1..=CAPABILITY_TAGS.len()).contains(&index) {
                capabilities.push(CAPABILITY_TAGS[index - 1].to_string());
            }
        }
    }
    specifications.insert("capabilities", capabilities);

    println!("\n--- Use Case ---");
    specifications.insert(
        "use_case",
        prompt("Describe the specific use case for this agent: ")?,
    );

    println!("\n--- Advanced Options ---");
    if confirm("Do you want to configure advanced options?")? {
        let model = select_option(
            "LLM model",
            &["gpt-4", "gpt-3.5-turbo", "claude-2", "claude-instant"],
            "gpt-4",
        )?;
        specifications.insert("model", model);

        if confirm("Do you have any custom requirements?")? {
            specifications.insert(
                "custom_requirements",
                prompt("Enter custom requirements: ")?,
            );
        }

        if confirm("Do you want to configure API keys now?")? {
            let mut api_keys = Map::new();
            let openai = prompt("OpenAI API key (leave blank to skip): ")?;
            let anthropic = prompt("Anthropic API key (leave blank to skip): ")?;
            if !openai.is_empty() {
                api_keys.insert("openai".to_string(), Value::String(openai));
            }
            if !anthropic.is_empty() {
                api_keys.insert("anthropic".to_string(), Value::String(anthropic));
            }
            specifications.insert("api_keys", api_keys);
        }
    }

    Ok(specifications)
}

/// Ask where to save, defaulting to `./generated_agent`. An existing
/// directory is only reused with explicit consent; otherwise the first
/// free `_{i}` sibling takes its place.
fn output_directory() -> Result<PathBuf> {
    let default_dir = std::env::current_dir()
        .map_err(|e| {
            error::io_error(format!("Failed to resolve working directory: {}", e))
                .with_operation("wizard::output_directory")
        })?
        .join("generated_agent");

    let entered = prompt(&format!(
        "\nOutput directory (default: {}): ",
        default_dir.display()
    ))?;
    let mut output_dir = if entered.trim().is_empty() {
        default_dir
    } else {
        PathBuf::from(entered.trim())
    };

    if output_dir.exists()
        && !confirm(&format!(
            "Directory {} already exists. Overwrite?",
            output_dir.display()
        ))?
    {
        output_dir = unique_output_dir(&output_dir);
        println!("Using {} instead.", output_dir.display());
    }

    Ok(output_dir)
}

fn confirm(message: &str) -> Result<bool> {
    let response = prompt(&format!("{} (y/n): ", message))?;
    let response = response.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Numbered single-choice menu. Empty, non-numeric, and out-of-range
/// input all resolve to the default.
fn select_option(name: &str, options: &[&str], default: &str) -> Result<String> {
    println!("\n{} options:", name);
    for (i, option) in options.iter().enumerate() {
        println!("{}. {}", i + 1, option);
    }

    let default_idx = options.iter().position(|&option| option == default).unwrap_or(0) + 1;
    let choice = prompt(&format!(
        "Select {} (1-{}, default: {}): ",
        name.to_lowercase(),
        options.len(),
        default_idx
    ))?;
    let choice = choice.trim();

    if choice.is_empty() {
        return Ok(options[default_idx - 1].to_string());
    }
    if let Ok(index) = choice.parse::<usize>() {
        if (1..=options.len()).contains(&index) {
            return Ok(options[index - 1].to_string());
        }
    }
    Ok(default.to_string())
}

/// Print a prompt and read one line, without the trailing newline.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().map_err(|e| {
        error::io_error(format!("Failed to flush stdout: {}", e)).with_operation("wizard::prompt")
    })?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(|e| {
        error::io_error(format!("Failed to read input: {}", e)).with_operation("wizard::prompt")
    })?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
