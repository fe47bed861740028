use repogen_cli::RepogenCli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    RepogenCli::new().parse_and_run().await
}
