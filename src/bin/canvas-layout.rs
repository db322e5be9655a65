use std::collections::BTreeMap;

use anyhow::Context as _;
use canvas_layout::{
    Dimension, LAYOUT_MULTIPLE, LAYOUT_SINGLE, LayoutError, LayoutOptions, LayoutResult,
    LayoutSpec, OUTPUT_RESOLUTION, WatermarkPosition, encode, from_json_str, resolve,
    scale_to_fit,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "canvas-layout", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one layout spec for a media element on a canvas.
    Resolve(ResolveArgs),
    /// Scale media to fit inside a bounding box, keeping its aspect ratio.
    Fit(FitArgs),
    /// Print the layout spec of a watermark preset.
    Watermark(WatermarkArgs),
    /// Resolve a full composite from a layout string.
    Composite(CompositeArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Canvas size, `WxH`.
    #[arg(long, value_parser = parse_dimension)]
    canvas: Dimension,

    /// Media size, `WxH`.
    #[arg(long, value_parser = parse_dimension)]
    media: Dimension,

    /// Layout spec JSON.
    #[arg(long)]
    spec: String,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Bounding box, `WxH`.
    #[arg(long = "box", value_parser = parse_dimension)]
    bounds: Dimension,

    /// Media size, `WxH`.
    #[arg(long, value_parser = parse_dimension)]
    media: Dimension,
}

#[derive(Parser, Debug)]
struct WatermarkArgs {
    /// One of `topLeft`, `topRight`, `bottomLeft`, `bottomRight`.
    #[arg(long)]
    position: String,
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// `;`-separated layout string.
    #[arg(long)]
    layout: String,

    /// `WxH`, `lower` or `upper`.
    #[arg(long)]
    output_resolution: String,

    /// Lower (or only) source size, `WxH`.
    #[arg(long, value_parser = parse_dimension)]
    lower: Dimension,

    /// Upper source size, `WxH`. Without it the single-source layout is used.
    #[arg(long, value_parser = parse_dimension)]
    upper: Option<Dimension>,

    /// Watermark image size, `WxH`.
    #[arg(long, value_parser = parse_dimension)]
    watermark: Option<Dimension>,
}

fn parse_dimension(s: &str) -> LayoutResult<Dimension> {
    let (w, h) = s
        .trim()
        .split_once('x')
        .ok_or_else(|| LayoutError::validation(format!("expected WxH, got '{s}'")))?;
    let number = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| LayoutError::validation(format!("bad size component '{v}': {e}")))
    };
    Dimension::new(number(w)?, number(h)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let out = match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args)?,
        Command::Fit(args) => cmd_fit(args)?,
        Command::Watermark(args) => cmd_watermark(args)?,
        Command::Composite(args) => cmd_composite(args)?,
    };

    let text = serde_json::to_string_pretty(&out).context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<serde_json::Value> {
    let spec: LayoutSpec = from_json_str(&args.spec).context("parse --spec")?;
    let layout = resolve(args.canvas, args.media, &spec).context("resolve layout")?;
    Ok(encode(&layout)?)
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<serde_json::Value> {
    let fit = scale_to_fit(args.bounds, args.media)
        .with_context(|| format!("fit {} into {}", args.media, args.bounds))?;
    Ok(encode(&fit)?)
}

fn cmd_watermark(args: WatermarkArgs) -> anyhow::Result<serde_json::Value> {
    let position: WatermarkPosition = args
        .position
        .parse()
        .with_context(|| format!("watermark position '{}'", args.position))?;
    Ok(encode(&position.layout_spec())?)
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<serde_json::Value> {
    let key = if args.upper.is_some() {
        LAYOUT_MULTIPLE
    } else {
        LAYOUT_SINGLE
    };
    let options = BTreeMap::from([
        (key.to_string(), args.layout.clone()),
        (OUTPUT_RESOLUTION.to_string(), args.output_resolution.clone()),
    ]);
    let layout_options =
        LayoutOptions::from_options(&options).with_context(|| format!("read '{key}'"))?;

    let composite = match args.upper {
        Some(upper) => layout_options.resolve_multiple(args.lower, upper, args.watermark),
        None => layout_options.resolve_single(args.lower, args.watermark),
    }
    .context("resolve composite layout")?;
    Ok(encode(&composite)?)
}
