//! Schema bootstrap and the reference fixture
//!
//! DDL is written to run unchanged on PostgreSQL and SQLite.

use sqlx::AnyPool;

use super::DbError;

/// Suppliers in the reference fixture: (fid, fnome, indirizzo)
pub const FIXTURE_SUPPLIERS: &[(&str, &str, &str)] = &[
    ("F01", "Acme", "Via Roma 1, Milano"),
    ("F02", "WidgetCorp", "Via Milano 2, Torino"),
    ("F03", "Supplies Inc", "Via Torino 3, Genova"),
    ("F04", "TechParts", "Via Venezia 4, Venezia"),
    ("F05", "MegaSupplies", "Via Napoli 5, Napoli"),
    ("F06", "GreenTech", "Via Palermo 6, Palermo"),
    ("F07", "RedComponents", "Via Firenze 7, Firenze"),
];

/// Parts in the reference fixture: (pid, pnome, colore)
pub const FIXTURE_PARTS: &[(&str, &str, &str)] = &[
    ("P01", "Bullone", "rosso"),
    ("P02", "Vite", "blu"),
    ("P03", "Dado", "rosso"),
    ("P04", "Rivetto", "verde"),
    ("P05", "Molla", "blu"),
    ("P06", "Guarnizione", "rosso"),
    ("P07", "Cuscinetto", "verde"),
    ("P08", "Cavo", "blu"),
    ("P09", "Resistore", "rosso"),
    ("P10", "Condensatore", "verde"),
    ("P11", "Trasformatore", "verde"),
    ("P12", "Fusibile", "rosso"),
];

/// Catalog rows in the reference fixture: (fid, pid, costo)
///
/// F01 carries every part; F07 carries only red parts.
pub const FIXTURE_CATALOG: &[(&str, &str, f64)] = &[
    ("F01", "P01", 10.5),
    ("F01", "P02", 5.1),
    ("F01", "P03", 8.4),
    ("F01", "P04", 6.0),
    ("F01", "P05", 7.3),
    ("F01", "P06", 9.0),
    ("F01", "P07", 12.2),
    ("F01", "P08", 4.6),
    ("F01", "P09", 15.0),
    ("F01", "P10", 8.6),
    ("F01", "P11", 18.0),
    ("F01", "P12", 6.5),
    ("F02", "P01", 11.0),
    ("F02", "P02", 5.0),
    ("F02", "P03", 8.1),
    ("F02", "P04", 6.7),
    ("F02", "P05", 7.0),
    ("F02", "P07", 11.8),
    ("F03", "P08", 3.9),
    ("F03", "P09", 14.8),
    ("F03", "P10", 9.8),
    ("F03", "P11", 17.5),
    ("F03", "P12", 6.2),
    ("F04", "P04", 6.1),
    ("F04", "P07", 12.0),
    ("F04", "P10", 8.9),
    ("F04", "P11", 18.3),
    ("F05", "P02", 5.3),
    ("F05", "P05", 7.4),
    ("F05", "P06", 9.2),
    ("F05", "P08", 4.8),
    ("F06", "P04", 6.4),
    ("F06", "P07", 12.5),
    ("F06", "P10", 9.1),
    ("F07", "P01", 10.9),
    ("F07", "P03", 8.3),
    ("F07", "P06", 9.1),
    ("F07", "P09", 15.2),
    ("F07", "P12", 6.7),
];

/// Create the three catalog tables if they do not exist.
pub async fn create(pool: &AnyPool) -> Result<(), DbError> {
    tracing::info!("Creating catalog schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Fornitori (
            fid VARCHAR(16) PRIMARY KEY,
            fnome VARCHAR(128) NOT NULL,
            indirizzo VARCHAR(255)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Pezzi (
            pid VARCHAR(16) PRIMARY KEY,
            pnome VARCHAR(128) NOT NULL,
            colore VARCHAR(32) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Catalogo (
            fid VARCHAR(16) NOT NULL REFERENCES Fornitori(fid),
            pid VARCHAR(16) NOT NULL REFERENCES Pezzi(pid),
            costo DOUBLE PRECISION NOT NULL CHECK (costo >= 0),
            PRIMARY KEY (fid, pid)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Catalog schema ready");
    Ok(())
}

/// Load the reference fixture. Rows already present are left untouched.
pub async fn seed_fixture(pool: &AnyPool) -> Result<(), DbError> {
    for (fid, fnome, indirizzo) in FIXTURE_SUPPLIERS {
        sqlx::query(
            "INSERT INTO Fornitori (fid, fnome, indirizzo) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
        )
        .bind(*fid)
        .bind(*fnome)
        .bind(*indirizzo)
        .execute(pool)
        .await?;
    }

    for (pid, pnome, colore) in FIXTURE_PARTS {
        sqlx::query(
            "INSERT INTO Pezzi (pid, pnome, colore) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
        )
        .bind(*pid)
        .bind(*pnome)
        .bind(*colore)
        .execute(pool)
        .await?;
    }

    for (fid, pid, costo) in FIXTURE_CATALOG {
        sqlx::query(
            "INSERT INTO Catalogo (fid, pid, costo) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
        )
        .bind(*fid)
        .bind(*pid)
        .bind(*costo)
        .execute(pool)
        .await?;
    }

    tracing::info!(
        suppliers = FIXTURE_SUPPLIERS.len(),
        parts = FIXTURE_PARTS.len(),
        offers = FIXTURE_CATALOG.len(),
        "Fixture loaded"
    );
    Ok(())
}
