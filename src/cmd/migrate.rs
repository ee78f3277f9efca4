use sqlx::{migrate::Migrator, Connection};

use crate::{pkg::internal::store::PgDocumentStore, prelude::Result};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply(store: &PgDocumentStore) -> Result<()> {
    let mut conn = store.connect().await?;
    let mut tx = conn.begin().await?;
    MIGRATOR.run(&mut *tx).await?;
    tx.commit().await?;
    conn.close().await?;

    println!("Migrations applied successfully");
    Ok(())
}
