use chrono::NaiveDate;
use sweet_crust_api::{
    config::AppConfig,
    db::create_pool,
    models::OrderStatus,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_orders(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_orders(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let orders = vec![
        ("SC-1001", "Ada Lovelace", "Sourdough loaf", 2.0, "Pending"),
        ("SC-1002", "Grace Hopper", "Butter croissant", 6.0, "Completed"),
        ("SC-1003", "Alan Turing", "Cinnamon roll", 3.0, "Pending"),
        ("SC-1004", "Edsger Dijkstra", "Apple pie", 1.0, "Completed"),
    ];

    let order_date = NaiveDate::from_ymd_opt(2025, 6, 1)
        .ok_or_else(|| anyhow::anyhow!("invalid seed date"))?;

    for (order_id, customer, product, quantity, status) in orders {
        let status = OrderStatus::parse(status)
            .ok_or_else(|| anyhow::anyhow!("invalid seed status"))?;
        sqlx::query(
            r#"
            INSERT INTO orders (order_id, customer_name, product_ordered, quantity, order_date, order_status)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (order_id) DO NOTHING
            "#,
        )
        .bind(order_id)
        .bind(customer)
        .bind(product)
        .bind(quantity)
        .bind(order_date)
        .bind(status)
        .execute(pool)
        .await?;
    }

    println!("Seeded orders");
    Ok(())
}
