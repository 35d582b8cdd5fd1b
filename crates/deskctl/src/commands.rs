//! Command handlers for deskctl.

use crate::client::DeskClient;
use anyhow::Result;
use desk_common::TicketResponse;
use owo_colors::OwoColorize;

/// Handle health command
pub async fn health(client: &DeskClient) -> Result<()> {
    let health = client.health().await?;
    println!("deskd: {}", health.status.bright_green());
    Ok(())
}

/// Handle order command
pub async fn order(client: &DeskClient, order_id: &str) -> Result<()> {
    let order = client.order(order_id).await?;

    if !order.exists {
        println!("{}  {}", order.order_id.bold(), "not found".bright_red());
        return Ok(());
    }

    println!("{}", order.order_id.bold());
    println!("  status:       {}", order.status);
    println!("  last update:  {}", order.last_update);
    if let (Some(carrier), Some(tracking)) = (&order.carrier, &order.tracking) {
        println!("  carrier:      {}", carrier);
        println!("  tracking:     {}", tracking);
    }
    Ok(())
}

/// Handle analyze command
pub async fn analyze(
    client: &DeskClient,
    order_id: Option<String>,
    text: &str,
    json: bool,
) -> Result<()> {
    let response = client.analyze(order_id, text).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_analysis(&response);
    Ok(())
}

fn print_analysis(response: &TicketResponse) {
    println!();
    println!("{}", "Summary".bold());
    println!("  {}", response.summary);
    println!();
    println!("{}", "Predicted Category".bold());
    println!("  {}", response.category.to_string().bright_green());
    println!();
    println!("{}", "Suggested Response".bold());
    println!("  {}", response.suggested_response);
    println!();

    // same one-line trace the web form shows
    let trace = &response.trace;
    println!(
        "{}",
        format!(
            "Order ID used: {} • Exists: {} • Source: {}",
            trace.order_id_effective.as_deref().unwrap_or("None"),
            trace.order_exists.as_deref().unwrap_or("n/a"),
            trace.category_source
        )
        .dimmed()
    );
}
