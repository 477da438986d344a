use clap::Parser;
use lucky_draw::core::loader;
use lucky_draw::core::report::PublishedDraw;
use lucky_draw::domain::ports::Storage;
use lucky_draw::utils::logger::{self, LogFormat};
use lucky_draw::{verify, DrawConfig, LocalStorage, Verification};

#[derive(Parser)]
#[command(name = "verify-draw")]
#[command(about = "Replay a published draw and check it against the UID list")]
struct Args {
    /// UID file the draw was made from
    #[arg(short, long)]
    input: String,

    /// JSON result written by `lucky-draw --output <file>.json`
    #[arg(short, long)]
    result: String,

    /// Pre-announced seed; when given it must match the published one
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(LogFormat::Compact, args.verbose);

    let storage = LocalStorage::current_dir();
    let published = PublishedDraw::from_json(&storage.read_file(&args.result).await?)?;
    let claimed = published.result;
    tracing::info!(
        "📁 Loaded published draw from {} (generated at {})",
        args.result,
        published.generated_at
    );

    if let Some(raw) = &args.seed {
        let announced = lucky_draw::config::toml_config::parse_seed("seed", raw)?;
        if announced != claimed.seed {
            eprintln!(
                "❌ Published seed {} differs from the announced seed {}",
                claimed.seed, announced
            );
            std::process::exit(1);
        }
    }

    let participants = loader::load(&storage, &args.input).await?;
    let config = DrawConfig::new(claimed.seed, claimed.a, claimed.b, claimed.c);

    match verify(&participants, &config, &claimed)? {
        Verification::Match => {
            println!(
                "✅ Draw verified: seed {}, {} participants, {} winners",
                claimed.seed,
                participants.len(),
                claimed.winner_count()
            );
            Ok(())
        }
        mismatch => {
            tracing::error!("Verification failed: {:?}", mismatch);
            eprintln!("❌ Draw does not reproduce:");
            eprintln!("{}", serde_json::to_string_pretty(&mismatch)?);
            std::process::exit(1);
        }
    }
}
