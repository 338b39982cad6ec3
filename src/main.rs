#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    formation_docs_server::run().await
}
