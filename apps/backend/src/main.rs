#[tokio::main]
async fn main() -> anyhow::Result<()> {
    swipestudy_backend::run().await
}
