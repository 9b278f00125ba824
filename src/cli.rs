use crate::{
    config::RendererConfig,
    constants::{verbosity, DEFAULT_TEMPLATES_DIR, STDIN_INDICATOR},
    error::{Error, Result},
    fs::{LocalFs, TemplateFs},
    renderer::{FuncMap, Options, Renderer, ResponseRenderer},
};
use clap::Parser;
use log::{debug, LevelFilter};
use minijinja::Value;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Command-line arguments for previewing templates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template to render, relative to the template directory
    #[arg(value_name = "NAME", required_unless_present = "list")]
    pub name: Option<String>,

    /// Template directory (defaults to the configured one, then `templates`)
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Include pattern, repeatable. Read from `renderer.{json,yaml,yml}` when omitted
    #[arg(short, long = "include", value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Template data as JSON string or `-` to read from stdin
    #[arg(short, long)]
    pub data: Option<String>,

    /// List parsed templates instead of rendering
    #[arg(short, long)]
    pub list: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What a preview "request" exposes to template functions.
#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub name: String,
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

/// Functions available while previewing: `now_unix()` always, and
/// `current_template()` once a request is being rendered.
pub fn preview_funcs(request: Option<&PreviewRequest>) -> FuncMap {
    let mut funcs = FuncMap::new();
    funcs.insert(
        "now_unix".into(),
        Value::from_function(|| {
            SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
        }),
    );
    if let Some(request) = request {
        let name = request.name.clone();
        funcs.insert("current_template".into(), Value::from_function(move || name.clone()));
    }
    funcs
}

/// Builds renderer options from the arguments, falling back to the config file
/// in the current directory when no include pattern was given.
pub fn build_options(args: &Args) -> Result<Options<PreviewRequest>> {
    let mut options: Options<PreviewRequest> = if args.include.is_empty() {
        let cwd = std::env::current_dir()?;
        debug!("No include pattern given, loading configuration from '{}'", cwd.display());
        RendererConfig::load_config(&cwd)?.into_options(&cwd)
    } else {
        let mut options = Options::new(LocalFs::new(DEFAULT_TEMPLATES_DIR));
        options.include = args.include.clone();
        options
    };
    if let Some(templates) = &args.templates {
        let fs: Arc<dyn TemplateFs> = Arc::new(LocalFs::new(templates));
        options.fs = Some(fs);
    }
    Ok(options.with_funcs(preview_funcs))
}

/// Parses template data: a JSON string, `-` for stdin, or an empty object.
pub fn parse_data(data: Option<&str>) -> Result<serde_json::Value> {
    let buf = match data {
        None => return Ok(serde_json::Value::Object(serde_json::Map::new())),
        Some(STDIN_INDICATOR) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(data) => data.to_string(),
    };
    serde_json::from_str(&buf).map_err(|e| Error::InvalidData(e.to_string()))
}

pub fn run(args: Args) -> Result<()> {
    let renderer = Renderer::new(build_options(&args)?)?;

    if args.list {
        for name in renderer.template_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let name = args.name.unwrap_or_default();
    let data = parse_data(args.data.as_deref())?;
    let request = PreviewRequest { name: name.clone() };
    let stdout = std::io::stdout();
    renderer.render(stdout.lock(), &name, data, &request)?;
    Ok(())
}
