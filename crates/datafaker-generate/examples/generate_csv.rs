use std::env;
use std::path::PathBuf;

use datafaker_generate::{FileTarget, GenerateOptions, GenerationEngine, GenerationRequest};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut request_path: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--request" => request_path = args.next().map(PathBuf::from),
            "--out" => out_dir = args.next().map(PathBuf::from),
            _ => {
                if request_path.is_none() {
                    request_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let request_path = request_path.ok_or("missing --request path")?;
    let request_json = std::fs::read_to_string(&request_path)?;
    let request: GenerationRequest = serde_json::from_str(&request_json)?;

    let mut options = GenerateOptions::default();
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }

    let engine = GenerationEngine::new(options);
    let result = engine.run(&request, &FileTarget::default())?;

    println!("run_dir={}", result.run_dir.display());
    Ok(())
}
