use anyhow::Result;
use pdf_chat_client::backend_client::BackendClient;
use pdf_chat_client::chat_session::ChatSession;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let backend = BackendClient::from_env();
    println!("PDF chat client - backend at {}", backend.base_url());
    print_help();

    let mut session = ChatSession::new(backend);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "upload" if !rest.is_empty() => {
                let notice = session.submit_document(Path::new(rest)).await;
                println!("{}", notice);
            }
            "ask" => {
                let answer = session.submit_question(rest).await;
                println!("Answer: {}", answer);
            }
            "status" => match session.pdf_name() {
                Some(name) => println!("Current document: {}", name),
                None => println!("No document uploaded yet"),
            },
            "quit" | "exit" => break,
            _ => print_help(),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands: upload <path> | ask <question> | status | quit");
}
