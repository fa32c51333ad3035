//! Interactive consultation form
//!
//! Pick a category, describe the worry, read the advice.
//!
//! Usage: cargo run --bin onayami

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use onayami::core::Config;
use onayami::features::advisor::{OpenAiClient, ResponseGenerator};
use onayami::features::categories::{Category, CategoryRegistry};
use onayami::features::consultation::validator::{ValidationError, MAX_CHARS};
use onayami::features::consultation::{
    ConsultationDesk, DeskReply, UNSUPPORTED_CATEGORY_MESSAGE,
};

const TITLE: &str = "🤖 お悩み相談AI";
const SUBTITLE: &str = "あなたのお悩みを選択したカテゴリーに応じてAIがアドバイスします";
const CATEGORY_PROMPT: &str = "相談したいお悩みを選択してください。";
const TEXT_PROMPT: &str = "あなたのお悩みを詳しく入力してください。";
const OVERRIDE_PROMPT: &str = "それでもこのカテゴリーで相談する";
const AGAIN_PROMPT: &str = "別のお悩みを相談しますか？";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // The openai crate reads its key from the environment, not from our config
    std::env::set_var("OPENAI_API_KEY", &config.openai_api_key);
    std::env::set_var("OPENAI_KEY", &config.openai_api_key);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!(
        "Starting consultation form (model {}, timeout {}s)",
        config.openai_model, config.request_timeout_secs
    );

    let client = OpenAiClient::new(Duration::from_secs(config.request_timeout_secs));
    let generator = ResponseGenerator::new(Arc::new(client), config.openai_model.clone());
    let desk = ConsultationDesk::new(CategoryRegistry::new(), generator);

    println!("{TITLE}");
    println!("### {SUBTITLE}\n");

    loop {
        run_round(&desk).await?;

        let again = Confirm::new()
            .with_prompt(AGAIN_PROMPT)
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        println!();
    }

    info!("Consultation form closed");
    Ok(())
}

/// One pass through the form: select, describe, screen, answer.
async fn run_round(desk: &ConsultationDesk) -> Result<()> {
    let names = desk.registry().names();
    let index = Select::new()
        .with_prompt(CATEGORY_PROMPT)
        .items(&names)
        .default(0)
        .interact()?;
    let name = names[index];

    println!("{}", "─".repeat(40));

    let Some(category) = desk.registry().get_category(name) else {
        error!("Selector offered unregistered category {name:?}");
        println!("{UNSUPPORTED_CATEGORY_MESSAGE}");
        return Ok(());
    };

    let text = read_worry(category)?;
    let request_id = Uuid::new_v4();

    let request = match desk.screen(name, &text, false, request_id) {
        Ok(request) => request,
        Err(DeskReply::RelevanceWarning(warning)) => {
            println!("{warning}");
            let proceed = Confirm::new()
                .with_prompt(OVERRIDE_PROMPT)
                .default(false)
                .interact()?;
            if !proceed {
                return Ok(());
            }
            match desk.screen(name, &text, true, request_id) {
                Ok(request) => request,
                Err(reply) => {
                    show(&reply);
                    return Ok(());
                }
            }
        }
        Err(reply) => {
            show(&reply);
            return Ok(());
        }
    };

    println!("回答を生成中...");
    let answer = desk.answer(&request, request_id).await;
    show(&DeskReply::Answer(answer));
    Ok(())
}

/// Read the consultation text. The widget itself refuses input over the length limit.
fn read_worry(category: &Category) -> Result<String> {
    println!("📝 {}", category.description);
    println!("   ({})", category.placeholder());

    let text: String = Input::new()
        .with_prompt(TEXT_PROMPT)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.chars().count() > MAX_CHARS {
                Err(ValidationError::TooLong.message().to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(text)
}

fn show(reply: &DeskReply) {
    match reply {
        DeskReply::Unsupported(message) | DeskReply::InvalidInput(message) => {
            println!("❌ {message}");
        }
        DeskReply::RelevanceWarning(warning) => println!("{warning}"),
        DeskReply::Answer(answer) => {
            println!("\n✅ 回答\n");
            println!("{answer}\n");
        }
    }
}
