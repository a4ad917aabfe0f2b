use loadgen::{ConversationTask, LoadRunner, QuestionCorpus, RunConfig};

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("Starting load test:");
    println!("  Target: {}", config.target.base_url);
    println!("  Simulated users: {}", config.load.users);
    println!("  Run duration: {:?}", config.load.duration);
    println!(
        "  Wait between requests: {:.1}s - {:.1}s",
        config.load.wait_min_secs, config.load.wait_max_secs
    );

    let corpus = QuestionCorpus::default_questions();
    let task = match ConversationTask::new(config.target, corpus) {
        Ok(task) => task,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let summary = LoadRunner::new(task, config.load).run().await;

    println!("\n=== Load Summary ===");
    println!("Elapsed: {:?}", summary.elapsed);
    println!(
        "Requests: {} ({} transport errors)",
        summary.total_requests, summary.transport_errors
    );
    if summary.elapsed.as_secs_f64() > 0.0 {
        println!(
            "Throughput: {:.2} req/s",
            summary.total_requests as f64 / summary.elapsed.as_secs_f64()
        );
    }
    println!("Status codes:");
    let mut codes: Vec<_> = summary.status_counts.iter().collect();
    codes.sort();
    for (code, count) in codes {
        println!("  {}: {}", code, count);
    }
}
