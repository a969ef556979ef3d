//! Example: translating text and identifying its language.
//!
//! Reads the API key from `WATSON_APIKEY`.
//!
//! Run with: cargo run --example translate -- --source en --target es "Hello, world"

use clap::Parser;
use watsonkit::services::LanguageTranslatorV3;
use watsonkit::types::language_translator::{IdentifyParams, TranslateParams};
use watsonkit::{Credentials, Error, Service};

/// Translate text with Language Translator v3.
#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about, long_about = None)]
struct Args {
    /// Text to translate
    text: String,

    /// Source language code
    #[arg(long, default_value = "en")]
    source: String,

    /// Target language code
    #[arg(long, default_value = "es")]
    target: String,

    /// Service URL
    #[arg(long, default_value = LanguageTranslatorV3::DEFAULT_URL)]
    url: String,

    /// API version date
    #[arg(long, default_value = "2018-05-01")]
    version: String,

    /// Identify the language before translating
    #[arg(long, default_value_t = false)]
    identify: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> watsonkit::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let api_key = std::env::var("WATSON_APIKEY")
        .map_err(|_| Error::Config("set WATSON_APIKEY to your API key".to_string()))?;

    let translator = LanguageTranslatorV3::builder()
        .url(args.url)
        .version(args.version)
        .credentials(Credentials::api_key(api_key))
        .build()?;

    if args.identify {
        let identified = translator
            .identify(IdentifyParams {
                text: args.text.clone(),
            })
            .await?
            .into_result();
        if let Some(best) = identified.languages.first() {
            println!("Detected {} ({:.2})", best.language, best.confidence);
        }
    }

    match translator
        .translate(TranslateParams::new(args.text, &args.source, &args.target))
        .await
    {
        Ok(response) => {
            for translation in response.result.translations {
                println!("{}", translation.translation);
            }
        }
        Err(Error::Unauthorized { .. }) => eprintln!("Check WATSON_APIKEY"),
        Err(e) => return Err(e),
    }

    Ok(())
}
