use std::path::PathBuf;

/// Choropleth and time-series tooling for country datasets
#[derive(clap::Parser, Debug)]
#[command(name = "geodash", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file (base URL, page size, feature property keys)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render a choropleth map layer as SVG or GeoJSON
    Render(RenderArgs),

    /// Compute the yearly chart series for a country or the world
    Series(SeriesArgs),

    /// Compute category shares for a pie chart
    Share(ShareArgs),

    /// Print the legend as JSON
    Legend(LegendArgs),

    /// Export dataset rows as CSV
    Export(ExportArgs),

    /// Fetch a dataset from the backend service
    #[cfg(feature = "download")]
    Fetch(FetchArgs),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapFormat {
    #[default]
    Svg,
    Geojson,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Country boundaries (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub features: PathBuf,

    /// Dataset rows (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Output file, defaults to "./map.svg" or "./map.geojson"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    pub format: MapFormat,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct SeriesArgs {
    /// Dataset rows (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// "world" or a country code, e.g. KEN
    #[arg(short, long, default_value = "world")]
    pub scope: String,

    /// Rescale values so the maximum is 100
    #[arg(long)]
    pub normalize: bool,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShareArgs {
    /// Dataset rows (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Field naming each slice
    #[arg(long, default_value = "category_name")]
    pub label: String,

    /// Numeric field sizing each slice
    #[arg(long, default_value = "size_in_ha")]
    pub value: String,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct LegendArgs {
    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Dataset rows (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Dataset name used in the file name, e.g. climate
    #[arg(short, long)]
    pub dataset: String,

    /// "world" for every row, or a country code to export only its rows
    #[arg(short, long, default_value = "world")]
    pub scope: String,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub force: bool,
}

#[cfg(feature = "download")]
#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    /// Endpoint path on the backend, e.g. climate_data
    pub endpoint: String,

    /// Output JSON file, defaults to "./<endpoint>.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub force: bool,
}
