use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{DataConfig, MovieId, UserId};
use pipeline::{PERFECT_RATING, Recommendation, recommend_from_neighbour};
use rand::Rng;
use recommender::{EngineConfig, Recommender, SimilarityMetric};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What to Watch - movie recommendations from similar users
#[derive(Parser)]
#[command(name = "what-to-watch")]
#[command(about = "Movie recommendations from MovieLens ratings", long_about = None)]
struct Cli {
    /// Path to ratings.csv
    #[arg(long, global = true, default_value = "data/ml-latest-small/ratings.csv")]
    ratings: PathBuf,

    /// Path to movies.csv
    #[arg(long, global = true, default_value = "data/ml-latest-small/movies.csv")]
    movies: PathBuf,

    /// Number of phantom prior ratings used when smoothing averages
    #[arg(long, global = true, default_value = "11")]
    confidence: f64,

    /// Rating the phantom prior ratings are assumed to have
    #[arg(long, global = true, default_value = "3")]
    prior_mean: f64,

    /// How user similarity is scored
    #[arg(long, global = true, value_enum, default_value_t = MetricArg::Euclidean)]
    metric: MetricArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Euclidean,
    OverlapWeighted,
}

impl From<MetricArg> for SimilarityMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Euclidean => SimilarityMetric::Euclidean,
            MetricArg::OverlapWeighted => SimilarityMetric::OverlapWeighted,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pick similar users and browse their favourite movies (default)
    Interactive,

    /// Show the average rating of a movie
    Average {
        #[arg(long)]
        movie_id: MovieId,
    },

    /// List the best movies by smoothed average
    TopRated {
        /// Number of movies to show [default: 10]
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the users who rate most like a user
    Similar {
        #[arg(long)]
        user_id: UserId,

        /// Number of users to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how similar two users are
    Compare {
        #[arg(long)]
        user_a: UserId,

        #[arg(long)]
        user_b: UserId,
    },

    /// List a neighbour's 5-star movies that a user has not rated
    Recommend {
        #[arg(long)]
        user_id: UserId,

        #[arg(long)]
        neighbour_id: UserId,
    },

    /// Time similar-user queries for random users
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let data_config = DataConfig::new(&cli.ratings, &cli.movies);
    let engine_config = EngineConfig::default()
        .with_confidence(cli.confidence)
        .with_prior_mean(cli.prior_mean)
        .with_metric(cli.metric.into());

    let start = Instant::now();
    let recommender = Recommender::load(&data_config, engine_config)
        .context("Failed to load MovieLens dataset")?;
    info!("Dataset ready in {:?}", start.elapsed());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => handle_interactive(&recommender)?,
        Commands::Average { movie_id } => handle_average(&recommender, movie_id)?,
        Commands::TopRated { limit, json } => handle_top_rated(&recommender, limit, json)?,
        Commands::Similar {
            user_id,
            limit,
            json,
        } => handle_similar(&recommender, user_id, limit, json)?,
        Commands::Compare { user_a, user_b } => handle_compare(&recommender, user_a, user_b)?,
        Commands::Recommend {
            user_id,
            neighbour_id,
        } => handle_recommend(&recommender, user_id, neighbour_id)?,
        Commands::Benchmark { requests } => handle_benchmark(&recommender, requests)?,
    }

    Ok(())
}

/// Print `prompt` and read lines until one parses as a user id
///
/// Returns `None` on end of input.
fn prompt_user_id(input: &mut impl BufRead, prompt: &str) -> Result<Option<UserId>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse() {
            Ok(user_id) => return Ok(Some(user_id)),
            Err(_) => {
                print!("Please enter an integer: ");
                io::stdout().flush()?;
            }
        }
    }
}

/// Handle the 'interactive' command
fn handle_interactive(recommender: &Recommender) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n{}", "Welcome to What to Watch movie recommender!".bold().blue());
    let Some(user_id) = prompt_user_id(&mut input, "Your user ID: ")? else {
        return Ok(());
    };
    let similar = recommender.similar_users(user_id, Some(10))?;

    loop {
        println!("\nThese users have similar tastes to you: ");
        for user in &similar {
            println!("{}", user.user_id.to_string().green());
        }
        println!("Enter a user ID to see their recommendations or (0) for quit. ");
        let selected = prompt_user_id(
            &mut input,
            "Alternatively, enter a known user id for their recommendations: ",
        )?;
        let neighbour_id = match selected {
            None | Some(0) => break,
            Some(id) => id,
        };

        match recommend_from_neighbour(recommender, user_id, neighbour_id, PERFECT_RATING) {
            Ok(picks) => {
                // Clear the terminal before listing titles
                print!("\x1B[2J\x1B[1;1H");
                println!("You might enjoy these titles:\n");
                print_recommendations(&picks);
            }
            Err(e) => println!("{} {:#}", "Error:".red(), e),
        }
    }

    Ok(())
}

/// Handle the 'average' command
fn handle_average(recommender: &Recommender, movie_id: MovieId) -> Result<()> {
    let average = recommender.average_rating(movie_id)?;
    match recommender.index().movie(movie_id) {
        Some(movie) => println!("{}", movie.title.bold()),
        None => println!("{}", format!("Movie {}", movie_id).bold()),
    }
    println!("{}", average);
    Ok(())
}

/// Handle the 'top-rated' command
fn handle_top_rated(recommender: &Recommender, limit: Option<usize>, json: bool) -> Result<()> {
    let scores = match limit {
        Some(n) => recommender.top_rated(n),
        None => recommender.top_rated_default(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    println!("{}", "Top rated movies:".bold().blue());
    for (rank, score) in scores.iter().enumerate() {
        let title = recommender
            .index()
            .movie(score.movie_id)
            .map(|m| m.title.as_str())
            .unwrap_or("<unknown title>");
        println!(
            "{}. {} - {:.3} ({} ratings)",
            (rank + 1).to_string().green(),
            title,
            score.score,
            score.rating_count
        );
    }
    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(recommender: &Recommender, user_id: UserId, limit: usize, json: bool) -> Result<()> {
    let similar = recommender.similar_users(user_id, Some(limit))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&similar)?);
        return Ok(());
    }

    println!("{}", format!("Users similar to {}:", user_id).bold().blue());
    for user in &similar {
        println!("  {} {:.4}", user.user_id.to_string().green(), user.similarity);
    }
    Ok(())
}

/// Handle the 'compare' command
fn handle_compare(recommender: &Recommender, user_a: UserId, user_b: UserId) -> Result<()> {
    let shared = recommender.shared_ratings(user_a, user_b)?;
    let score = recommender.compare_users(user_a, user_b)?;

    println!(
        "{} Users {} and {} share {} rated movies",
        "•".cyan(),
        user_a,
        user_b,
        shared.len()
    );
    println!("{} Similarity: {:.4}", "•".cyan(), score);
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(recommender: &Recommender, user_id: UserId, neighbour_id: UserId) -> Result<()> {
    let picks = recommend_from_neighbour(recommender, user_id, neighbour_id, PERFECT_RATING)?;
    println!("{}", "You might enjoy these titles:\n".bold().blue());
    print_recommendations(&picks);
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(recommender: &Recommender, requests: usize) -> Result<()> {
    let users: Vec<UserId> = recommender.index().user_ids().collect();
    if users.is_empty() {
        return Err(anyhow!("Dataset has no users to benchmark"));
    }
    if requests == 0 {
        return Err(anyhow!("Benchmark needs at least one request"));
    }

    let mut rng = rand::rng();
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for _ in 0..requests {
        let user_id = users[rng.random_range(0..users.len())];
        let start = Instant::now();
        let similar = recommender.similar_users(user_id, Some(10))?;
        timings.push(start.elapsed());
        debug!("User {} has {} neighbours", user_id, similar.len());
    }

    let total_time: Duration = timings.iter().sum();
    timings.sort();
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", mean_latency(&timings));
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Mean of the timings, zero when there are none
fn mean_latency(timings: &[Duration]) -> Duration {
    if timings.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = timings.iter().sum();
    total.div_f64(timings.len() as f64)
}

/// Nearest-rank percentile of already sorted timings, `p` in [0, 1]
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    match sorted.len() {
        0 => Duration::ZERO,
        len => sorted[((len as f64 * p) as usize).min(len - 1)],
    }
}

/// Print each recommendation's title and average rating
fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("{}", "Nothing new to recommend from this user.".yellow());
        return;
    }
    for rec in recommendations {
        match &rec.title {
            Some(title) => println!("{}", title.bold()),
            None => println!("{}", format!("Movie {}", rec.movie_id).bold()),
        }
        println!("{}", rec.average);
    }
}
