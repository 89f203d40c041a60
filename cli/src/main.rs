mod table;

use clap::Parser;
use dotenv::dotenv;
use salary_stats::{hh, superjob};

const PROGRAMMING_LANGUAGES: [&str; 9] = [
    "Python",
    "Java",
    "JavaScript",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
];

/// Compares programmer salaries on HeadHunter and SuperJob per language.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Cli::parse();
    let superjob_api_key =
        std::env::var("SUPERJOB_API_KEY").expect("SUPERJOB_API_KEY not set");

    let languages = PROGRAMMING_LANGUAGES
        .into_iter()
        .map(String::from)
        .collect::<Vec<String>>();
    let client = reqwest::Client::new();

    let hh_statistics = hh::language_statistics(&client, &hh::Search::default(), &languages)
        .await
        .expect("Failed to collect HeadHunter statistics");
    let sj_statistics = superjob::language_statistics(
        &client,
        &superjob::Search::default(),
        &superjob_api_key,
        &languages,
    )
    .await
    .expect("Failed to collect SuperJob statistics");

    table::print_statistics("HeadHunter Moscow", &hh_statistics);
    table::print_statistics("SuperJob Moscow", &sj_statistics);
}
