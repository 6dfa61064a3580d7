use catalog_service::Variant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_service::run(Variant::Full).await
}
