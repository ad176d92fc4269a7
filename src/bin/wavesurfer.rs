use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use wavesurfer_widget::{
    AudioResolver, AudioSource, ComponentConfig, ComponentSource, PluginConfigList,
    PluginSelection, RegionInput, ResolveMode, SourceResolver, WaveSurferArgs, WidgetState,
    options::wave::decode_options, widget::component::build_payload,
};

#[derive(Parser, Debug)]
#[command(name = "wavesurfer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve an audio reference and print the URL or data URI.
    Resolve(ResolveArgs),
    /// Print the payload the widget would receive.
    Payload(PayloadArgs),
    /// Decode a value reported by the widget.
    State(StateArgs),
    /// Print where the widget bundle is loaded from.
    Component(ComponentArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Local path, http(s) URL or data URI.
    #[arg(long)]
    audio: String,

    /// Point local files at this dev server instead of inlining them.
    #[arg(long)]
    dev_server: Option<String>,
}

#[derive(Parser, Debug)]
struct PayloadArgs {
    /// Local path, http(s) URL or data URI.
    #[arg(long)]
    audio: String,

    /// JSON file holding a list of region mappings.
    #[arg(long)]
    regions: Option<PathBuf>,

    /// JSON file holding a (possibly partial) wave options mapping.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Comma-separated plugin names.
    #[arg(long, value_delimiter = ',', conflicts_with = "plugin_file")]
    plugins: Option<Vec<String>>,

    /// JSON file holding a list of plugin names or `{name, options}` mappings.
    #[arg(long)]
    plugin_file: Option<PathBuf>,

    /// Region palette name, sent as given.
    #[arg(long)]
    colormap: Option<String>,

    /// Widget key.
    #[arg(long)]
    key: Option<String>,

    /// Hide the transport controls.
    #[arg(long, default_value_t = false)]
    no_controls: bool,

    /// Point local files at this dev server instead of inlining them.
    #[arg(long)]
    dev_server: Option<String>,
}

#[derive(Parser, Debug)]
struct StateArgs {
    /// JSON file holding the reported value.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ComponentArgs {
    /// Directory containing `frontend/dist`.
    #[arg(long, default_value = ".")]
    package_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Payload(args) => cmd_payload(args),
        Command::State(args) => cmd_state(args),
        Command::Component(args) => cmd_component(args),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wavesurfer_widget=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolver(dev_server: Option<String>) -> AudioResolver {
    match dev_server {
        Some(base_url) => AudioResolver::new().with_mode(ResolveMode::DevServer { base_url }),
        None => AudioResolver::new(),
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read json '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse json '{}'", path.display()))
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let resolved = resolver(args.dev_server).resolve(Some(AudioSource::from(args.audio)))?;
    println!("{resolved}");
    Ok(())
}

fn cmd_payload(args: PayloadArgs) -> anyhow::Result<()> {
    let mut wargs = WaveSurferArgs::new(args.audio).show_controls(!args.no_controls);
    if let Some(path) = &args.regions {
        let Value::Array(maps) = read_json(path)? else {
            anyhow::bail!("'{}' must hold a list of regions", path.display());
        };
        wargs = wargs.regions(RegionInput::Maps(maps));
    }
    if let Some(path) = &args.options {
        wargs = wargs.wave_options(decode_options(&read_json(path)?)?);
    }
    if let Some(names) = args.plugins {
        wargs = wargs.plugins(PluginSelection::Names(names));
    }
    if let Some(path) = &args.plugin_file {
        wargs = wargs.plugins(PluginConfigList::from_value(&read_json(path)?)?);
    }
    if let Some(colormap) = args.colormap {
        wargs = wargs.region_colormap(colormap);
    }
    if let Some(key) = args.key {
        wargs = wargs.key(key);
    }

    let payload = build_payload(&resolver(args.dev_server), wargs)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    match WidgetState::from_value(&read_json(&args.in_path)?)? {
        WidgetState::Pending => println!("pending"),
        WidgetState::Ready { regions, ts } => {
            println!("ready ts={ts} regions={}", regions.len());
            for r in &regions {
                println!("{:>10.3} {:>10.3} {}", r.start, r.end, r.content);
            }
        }
    }
    Ok(())
}

fn cmd_component(args: ComponentArgs) -> anyhow::Result<()> {
    let config = ComponentConfig::from_env(&args.package_dir)?;
    match &config.source {
        ComponentSource::BuildDir(dir) => println!("{} path {}", config.name, dir.display()),
        ComponentSource::DevUrl(url) => println!("{} url {url}", config.name),
    }
    Ok(())
}
