#[tokio::main]
async fn main() {
    if let Err(e) = headache_intake::run().await {
        eprintln!("headache-intake: {e}");
        std::process::exit(1);
    }
}
