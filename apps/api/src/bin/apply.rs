//! Terminal driver for the application form: walks the wizard step by step
//! and submits to a running intake server.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use intake::form::client::HttpSubmitClient;
use intake::form::validation::FieldError;
use intake::form::{FormController, Notice, Step};

const DEFAULT_ENDPOINT: &str = "http://localhost:3000/submit-application";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let endpoint =
        std::env::var("INTAKE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let mut form = FormController::new(Arc::new(HttpSubmitClient::new(endpoint)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Application Form");
    loop {
        match form.step() {
            Step::Contact => {
                println!("\nContact details (step 1 of 3)");
                let f = form.fields_mut();
                f.name = read_line(&mut lines, "Name").await?;
                f.email = read_line(&mut lines, "Email").await?;
                f.phone = read_line(&mut lines, "Phone number").await?;
                if !form.next() {
                    print_errors(form.errors());
                }
            }
            Step::Background => {
                println!("\nBackground (step 2 of 3)");
                let f = form.fields_mut();
                f.dob = read_line(&mut lines, "Date of Birth (YYYY-MM-DD)").await?;
                f.address = read_line(&mut lines, "Address").await?;
                f.position = read_line(&mut lines, "Position applied for").await?;
                if !form.next() {
                    print_errors(form.errors());
                }
            }
            Step::Review => {
                println!("\nReview your information (step 3 of 3)");
                for (label, value) in form.entries() {
                    println!("  {label}: {value}");
                }
                let choice = read_line(&mut lines, "Type 'submit' to send or 'back' to edit").await?;
                if choice.eq_ignore_ascii_case("back") {
                    form.back();
                    continue;
                }
                if !choice.eq_ignore_ascii_case("submit") {
                    continue;
                }
                println!("Submitting...");
                match form.submit().await {
                    Some(Notice::Submitted { message }) => {
                        println!("{message}");
                        break;
                    }
                    Some(Notice::Failed { message }) => println!("{message}"),
                    None => print_errors(form.errors()),
                }
            }
        }
    }

    Ok(())
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>, prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    std::io::stdout().flush()?;
    let line = lines.next_line().await?.unwrap_or_default();
    Ok(line.trim().to_string())
}

fn print_errors(errors: &[FieldError]) {
    for error in errors {
        println!("  ! {}", error.message);
    }
}
