use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{MovieId, MovieRecord, MovieStore};
use pipeline::{Questionnaire, Recommender};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Marquee - movie catalog browser and recommender
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse, search and get recommendations from a movie catalog", long_about = None)]
struct Cli {
    /// Path to the movie dataset CSV
    #[arg(short, long, env = "MOVIES_CSV", default_value = "final_dataset.csv", global = true)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Address to bind, overriding HOST/PORT
        #[arg(long)]
        addr: Option<SocketAddr>,
    },

    /// Free-text search over titles, genres and overviews
    Search {
        /// Query text; initials such as "tdk" match titles too
        query: String,
    },

    /// List the catalog, optionally narrowed to one genre
    Movies {
        /// Case-insensitive genre substring
        #[arg(long)]
        genre: Option<String>,
    },

    /// Show every field of one movie
    Show {
        /// Movie ID
        id: MovieId,
    },

    /// Answer the questionnaire and get the top picks
    Recommend {
        /// happy, neutral or sad
        #[arg(long, default_value = "")]
        mood: String,

        /// alone, free or special
        #[arg(long, default_value = "")]
        occasion: String,

        /// Preferred genre (repeatable, at most three are used)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Exclude movies with adult-content signals
        #[arg(long)]
        age_appropriate: bool,

        /// 5, 10, 15, 25, "very old" or "any"
        #[arg(long, default_value = "any")]
        timeline: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,server=debug,pipeline=debug")
                }),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let store = Arc::new(
        MovieStore::load_from_file(&cli.data_file)
            .with_context(|| format!("Failed to load movie dataset {}", cli.data_file.display()))?,
    );
    tracing::debug!("Catalog ready in {:?}", start.elapsed());

    match cli.command {
        Commands::Serve { addr } => handle_serve(store, addr).await?,
        Commands::Search { query } => handle_search(&store, &query),
        Commands::Movies { genre } => handle_movies(&store, genre.as_deref()),
        Commands::Show { id } => handle_show(&store, id)?,
        Commands::Recommend {
            mood,
            occasion,
            genres,
            age_appropriate,
            timeline,
        } => {
            let age = if age_appropriate { "yes" } else { "no" };
            let questionnaire =
                Questionnaire::from_answers(&mood, &occasion, &genres, age, &timeline);
            handle_recommend(&store, &questionnaire)?
        }
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(store: Arc<MovieStore>, addr: Option<SocketAddr>) -> Result<()> {
    let mut config = server::Config::from_env()?;
    if let Some(addr) = addr {
        config.addr = addr;
    }

    println!(
        "{} Serving {} movies on http://{}",
        "✓".green(),
        store.len(),
        config.addr
    );
    server::serve(store, config).await
}

/// Handle the 'search' command
fn handle_search(store: &MovieStore, query: &str) {
    let results = pipeline::search(store.movies(), query);

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    print_movies(&results);
}

/// Handle the 'movies' command
fn handle_movies(store: &MovieStore, genre: Option<&str>) {
    let movies = pipeline::filter_by_genre(store.movies(), genre);

    let header = match genre {
        Some(genre) if !genre.is_empty() => format!("Movies in '{}':", genre),
        _ => "All movies:".to_string(),
    };
    println!("{}", header.bold().blue());
    print_movies(&movies);
}

/// Handle the 'show' command
fn handle_show(store: &MovieStore, id: MovieId) -> Result<()> {
    let movie = store
        .get_movie(id)
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;

    println!("{}", format!("{} ({})", movie.title, id).bold().blue());
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Released: {}", "• ".green(), movie.release_date);
    println!("{}Language: {}", "• ".green(), movie.original_language);
    println!(
        "{}Rating: {:.1} ({} votes)",
        "• ".cyan(),
        movie.vote_average,
        movie.vote_count
    );
    println!("{}Popularity: {:.1}", "• ".cyan(), movie.popularity);
    println!("{}Poster: {}", "• ".cyan(), movie.poster_url);
    println!("{}Backdrop: {}", "• ".cyan(), movie.poster_backdrop_url);
    println!();
    println!("{}", movie.overview);
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(store: &MovieStore, questionnaire: &Questionnaire) -> Result<()> {
    let today: jiff::civil::Date = jiff::Zoned::now().into();
    let recommender = Recommender::new(i32::from(today.year()));

    let picks = recommender.recommend(store.movies(), questionnaire)?;

    println!("{}", "Movie Recommendations:".bold().blue());
    if picks.is_empty() {
        println!("{}", "Nothing matched those answers.".yellow());
        return Ok(());
    }
    for (rank, movie) in picks.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - {:.1}/10",
            (rank + 1).to_string().green(),
            movie.title,
            year_label(movie),
            movie.genre,
            movie.vote_average
        );
    }
    Ok(())
}

/// One line per movie: id, title, year, genre and votes
fn print_movies(movies: &[&MovieRecord]) {
    if movies.is_empty() {
        println!("{}", "No movies found.".yellow());
        return;
    }
    for movie in movies {
        println!(
            "{}: {} ({}) [{}] avg {:.1} ({} votes)",
            movie.id.to_string().green(),
            movie.title,
            year_label(movie),
            movie.genre,
            movie.vote_average,
            movie.vote_count
        );
    }
}

fn year_label(movie: &MovieRecord) -> String {
    movie
        .release_year()
        .map_or_else(|| "n/a".to_string(), |year| year.to_string())
}
