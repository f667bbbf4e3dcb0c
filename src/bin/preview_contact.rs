//! Preview binary - fills in the contact form from the command line and walks
//! it through one submission, printing what the page would show.
//!
//! Usage:
//!   cargo run --bin preview -- name="Ana López" email=ana@example.com \
//!       subject=booking message="Quiero reservar un tour"
//!   cargo run --bin preview -- --locale fr name=Jean ...   # French messages
//!   cargo run --bin preview -- --fail name=...              # Simulated failure
//!
//! Optional environment variables:
//! - SIMULATED_SEND_DELAY_MS (defaults to 2000)
//! - STATUS_RESET_SECS (defaults to 5)

use anyhow::{bail, Context, Result};
use std::time::Duration;
use tracing::info;
use travel_site::config::Config;
use travel_site::contact::{
    ContactField, ContactForm, ContactSchema, SimulatedTransport, SubmissionController,
    SubmissionState,
};
use travel_site::i18n::Language;
use travel_site::pages::message_counter;

struct PreviewArgs {
    language: Language,
    fail: bool,
    fields: Vec<(ContactField, String)>,
}

impl PreviewArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut language = None;
        let mut fail = false;
        let mut fields = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fail" => fail = true,
                "--locale" => {
                    let code = args.next().context("--locale needs a value")?;
                    language = Some(Language::from_code(&code)?);
                }
                _ => {
                    let Some((name, value)) = arg.split_once('=') else {
                        bail!("Expected field=value, got '{}'", arg);
                    };
                    fields.push((name.parse()?, value.to_string()));
                }
            }
        }

        Ok(Self {
            language: language.unwrap_or_else(Language::canonical),
            fail,
            fields,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("travel_site=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args = PreviewArgs::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    let strings = args.language.strings();

    let delay = Duration::from_millis(config.simulated_send_delay_ms);
    let transport = if args.fail {
        SimulatedTransport::failing(delay)
    } else {
        SimulatedTransport::new(delay)
    };

    let form = ContactForm::new(ContactSchema::for_language(args.language));
    let controller = SubmissionController::new(form, transport)
        .with_reset_delay(Duration::from_secs(config.status_reset_secs));

    for (field, value) in args.fields {
        controller.set_field(field, value);
    }

    println!("\n========== CONTACT FORM ({}) ==========", args.language);
    {
        let form = controller.form();
        for field in ContactField::ALL {
            let marker = if field.is_required() { "*" } else { " " };
            println!(
                "{}{:<20} {}",
                marker,
                field.label(strings),
                form.data().get(field)
            );
            if let Some(error) = form.error(field) {
                println!("  ! {}", error);
            }
        }
        println!("{}", message_counter(strings, form.message_char_count()));
    }
    println!("=========================================\n");

    if !controller.can_submit() {
        println!("[{}] disabled: fix the fields above first", strings.submit_button);
        return Ok(());
    }

    let mut states = controller.subscribe();
    let watcher = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = *states.borrow_and_update();
            println!("state: {:?}", state);
            if state == SubmissionState::Idle {
                break;
            }
        }
    });

    info!("Submitting contact form...");
    let outcome = controller.submit().await?;

    if let Some(banner) = outcome.status_message(strings) {
        println!("\n{}\n", banner);
    }
    if outcome == SubmissionState::Error {
        println!("Form kept for retry: {}", controller.form().data().email);
    }

    // Banner clears after the reset delay
    watcher.await.context("State watcher panicked")?;
    Ok(())
}
