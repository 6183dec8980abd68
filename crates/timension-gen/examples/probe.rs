use serde::Deserialize;
use timension_gen::{CredentialStore, GeminiClient, GenerativeService, TextRequest};

#[derive(Debug, Deserialize)]
struct Fact {
    subject: String,
    detail: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = GeminiClient::new(CredentialStore::from_env())?;

    println!("credential resolved: {}", client.has_credential());
    println!("connectivity: {}", client.test_connectivity().await);

    if let Some(text) = client
        .generate_text(TextRequest::new("In one sentence, what year is it?"))
        .await
    {
        println!("text: {}", text.trim());
    }

    let schema = serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "subject": { "type": "STRING" },
            "detail": { "type": "STRING" },
        },
        "required": ["subject", "detail"],
    });
    let fact: Option<Fact> = client
        .generate_structured("State one curious fact about clocks.", schema)
        .await;
    println!("structured: {:?}", fact);

    Ok(())
}
