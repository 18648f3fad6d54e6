use clap::{Parser, Subcommand};
use mandhi_town::avatar::{
    self, AvatarBackend, CenterCropParams, CropState, RenderParams, RustBackend,
};
use mandhi_town::config::AppConfig;
use mandhi_town::ranking::{FilterState, SortKey};
use mandhi_town::storage::{FileStore, Session};
use mandhi_town::{catalog, config, output, query, ranking};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "mandhi-town")]
#[command(about = "Restaurant directory toolkit: ranking and avatar processing")]
#[command(long_about = "\
Restaurant directory toolkit: ranking and avatar processing

The dataset is a JSON array of restaurant records — the same payload the
directory API serves from /api/restaurants:

  [
    {
      \"id\": 2,
      \"name\": \"Royal Mandhi Palace\",
      \"location\": \"Heritage District\",
      \"type\": \"Arabian Cuisine\",
      \"rating\": 4.6,
      \"specialties\": [\"Lamb Mandhi\", \"Chicken Mandhi\", \"Fish Mandhi\"]
    },
    ...
  ]

Selections are shareable: every rank run prints its state as a query
string (q=..&meats=..&sort=..) that --params accepts back verbatim.

Run 'mandhi-town gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Restaurant dataset (JSON array of records)
    #[arg(long, default_value = "restaurants.json", global = true)]
    data: PathBuf,

    /// Configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Session state file used by --save / --load
    #[arg(long, default_value = ".mandhi-town-session.json", global = true)]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Shared selection flags for listing commands.
#[derive(clap::Args, Clone)]
struct FilterArgs {
    /// Free-text search over name, city, and dishes
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Category filter (repeatable), e.g. --category Chicken
    #[arg(long = "category")]
    categories: Vec<String>,

    /// City filter, exact match on the location field
    #[arg(long)]
    city: Option<String>,

    /// Complete selection as a query string; overrides the flags above
    #[arg(long)]
    params: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Filter and sort the dataset
    Rank {
        #[command(flatten)]
        filter: FilterArgs,
        /// Sort order
        #[arg(long, default_value_t = SortKey::RatingDesc)]
        sort: SortKey,
        /// Persist this selection for a later --load
        #[arg(long)]
        save: bool,
        /// Restore the last-saved selection, ignoring other flags
        #[arg(long)]
        load: bool,
    },
    /// Top restaurants by weighted score
    Leaderboard {
        #[command(flatten)]
        filter: FilterArgs,
        /// Entries to show (defaults to the configured size)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Produce a square avatar JPEG from a photo
    Avatar {
        /// Source photo (JPEG, PNG, or WebP)
        #[arg(long)]
        input: PathBuf,
        /// Output path
        #[arg(long, default_value = "avatar.jpg")]
        output: PathBuf,
        /// Zoom factor (clamped to the editor's range)
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Horizontal pan, in output pixels
        #[arg(long, default_value_t = 0.0)]
        offset_x: f64,
        /// Vertical pan, in output pixels
        #[arg(long, default_value_t = 0.0)]
        offset_y: f64,
        /// Ignore pan/zoom and take the largest centered square
        #[arg(long)]
        center_crop: bool,
    },
    /// Validate a dataset file
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Rank {
            filter,
            sort,
            save,
            load,
        } => {
            let app_config = config::load_config(&cli.config)?;
            let state = if load {
                let session = Session::new(FileStore::load(&cli.state_file));
                session
                    .params()
                    .map(|params| query::parse(&params))
                    .unwrap_or_default()
            } else {
                build_state(&filter, sort, &app_config)?
            };

            let catalog = catalog::load(&cli.data)?;
            let ranked = ranking::rank(&catalog.restaurants, &state);
            output::print_listing(&ranked, catalog.len());

            let params = query::serialize(&state);
            if !params.is_empty() {
                println!("Params: {params}");
            }
            if save {
                let mut session = Session::new(FileStore::load(&cli.state_file));
                session.set_params(&params)?;
            }
        }
        Command::Leaderboard { filter, top } => {
            let app_config = config::load_config(&cli.config)?;
            let mut state = build_state(&filter, SortKey::ScoreDesc, &app_config)?;
            // Score order always, even when --params carries another sort.
            state.sort = SortKey::ScoreDesc;

            let catalog = catalog::load(&cli.data)?;
            let size = top.unwrap_or(app_config.leaderboard.size);
            let entries = ranking::leaderboard(&catalog.restaurants, &state, size);
            output::print_leaderboard(&entries);
        }
        Command::Avatar {
            input,
            output,
            scale,
            offset_x,
            offset_y,
            center_crop,
        } => {
            let backend = RustBackend::new();
            let jpeg = if center_crop {
                backend.center_crop(&CenterCropParams {
                    source: input,
                    output_side: avatar::OUTPUT_SIDE,
                    quality: avatar::JPEG_QUALITY,
                })?
            } else {
                let dims = backend.identify(&input)?;
                let crop = CropState::new(scale, (offset_x, offset_y));
                let plan = avatar::plan_render((dims.width, dims.height), crop, avatar::OUTPUT_SIDE);
                backend.render(&RenderParams {
                    source: input,
                    plan,
                    output_side: avatar::OUTPUT_SIDE,
                    quality: avatar::JPEG_QUALITY,
                })?
            };
            std::fs::write(&output, &jpeg)?;
            println!(
                "Avatar written: {} ({}x{} JPEG)",
                output.display(),
                avatar::OUTPUT_SIDE,
                avatar::OUTPUT_SIDE
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.data.display());
            let catalog = catalog::load(&cli.data)?;
            output::print_check(&catalog);
            println!("==> Dataset is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Assemble filter state from CLI flags, validating categories against the
/// configured label set.
fn build_state(
    filter: &FilterArgs,
    sort: SortKey,
    app_config: &AppConfig,
) -> Result<FilterState, Box<dyn std::error::Error>> {
    if let Some(params) = &filter.params {
        return Ok(query::parse(params));
    }

    for category in &filter.categories {
        if !app_config.is_known_category(category) {
            return Err(format!(
                "unknown category '{}' (configured: {})",
                category,
                app_config.filters.categories.join(", ")
            )
            .into());
        }
    }

    Ok(FilterState {
        query: filter.query.clone().unwrap_or_default(),
        active_categories: filter
            .categories
            .iter()
            .map(|c| c.to_lowercase())
            .collect(),
        city: filter.city.as_ref().map(|c| c.to_lowercase()),
        sort,
    })
}
