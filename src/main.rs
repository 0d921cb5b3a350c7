use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    encouragebot::run().await
}
