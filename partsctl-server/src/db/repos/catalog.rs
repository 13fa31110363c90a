//! The ten catalog questions, one SQL statement each
//!
//! Every statement carries a total `ORDER BY` so that pagination over the
//! result is stable while the store is unchanged.

use async_trait::async_trait;
use sqlx::AnyPool;

use super::rows::{CheapestOffer, Part, PartSupplierCount, RedGreenSupplier, Supplier};
use super::DbError;
use crate::models::ColorSet;

/// Read-only access to the supplier/part catalog.
///
/// Handlers receive this capability through application state, so tests can
/// swap in any implementation.
#[async_trait]
pub trait SupplyCatalog: Send + Sync {
    /// Parts that appear in at least one catalog row, by name.
    async fn cataloged_parts(&self) -> Result<Vec<Part>, DbError>;

    /// Suppliers that carry every existing part.
    async fn universal_suppliers(&self) -> Result<Vec<Supplier>, DbError>;

    /// Suppliers that carry every part of `color`.
    async fn color_universal_suppliers(&self, color: &str) -> Result<Vec<Supplier>, DbError>;

    /// Parts sold by a supplier named `supplier_name` and by no differently named supplier.
    async fn parts_exclusive_to(&self, supplier_name: &str) -> Result<Vec<Part>, DbError>;

    /// Suppliers with at least one price above that part's average price.
    async fn suppliers_above_part_average(&self) -> Result<Vec<Supplier>, DbError>;

    /// Every catalog row priced at its part's minimum, ties included.
    async fn cheapest_offers(&self) -> Result<Vec<CheapestOffer>, DbError>;

    /// Suppliers whose non-empty catalog holds only parts of `color`.
    async fn mono_color_suppliers(&self, color: &str) -> Result<Vec<Supplier>, DbError>;

    /// Suppliers carrying at least one red and at least one green part.
    async fn red_and_green_suppliers(&self) -> Result<Vec<RedGreenSupplier>, DbError>;

    /// Suppliers carrying at least one part in any of `colors`.
    async fn suppliers_with_any_color(&self, colors: &ColorSet)
        -> Result<Vec<Supplier>, DbError>;

    /// Parts offered by at least `min_suppliers` distinct suppliers.
    async fn parts_with_min_suppliers(
        &self,
        min_suppliers: i64,
    ) -> Result<Vec<PartSupplierCount>, DbError>;

    /// Round-trip to the store.
    async fn ping(&self) -> Result<(), DbError>;
}

/// [`SupplyCatalog`] backed by a SQL connection pool
#[derive(Debug, Clone)]
pub struct SqlCatalog {
    pool: AnyPool,
}

impl SqlCatalog {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl SupplyCatalog for SqlCatalog {
    async fn cataloged_parts(&self) -> Result<Vec<Part>, DbError> {
        let rows = sqlx::query_as::<_, Part>(
            r#"
            SELECT DISTINCT p.pid, p.pnome, p.colore
            FROM Pezzi p
            JOIN Catalogo c ON c.pid = p.pid
            ORDER BY p.pnome, p.pid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), "cataloged parts");
        Ok(rows)
    }

    /// Relational division by count: a supplier's distinct parts must equal
    /// the size of the whole parts table.
    async fn universal_suppliers(&self) -> Result<Vec<Supplier>, DbError> {
        let rows = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT f.fid, f.fnome, f.indirizzo
            FROM Fornitori f
            JOIN Catalogo c ON c.fid = f.fid
            GROUP BY f.fid, f.fnome, f.indirizzo
            HAVING COUNT(DISTINCT c.pid) = (SELECT COUNT(*) FROM Pezzi)
            ORDER BY f.fid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), "universal suppliers");
        Ok(rows)
    }

    /// Same division restricted to one color. With no parts of that color the
    /// WHERE clause leaves nothing to group, so the result is empty.
    async fn color_universal_suppliers(&self, color: &str) -> Result<Vec<Supplier>, DbError> {
        let rows = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT f.fid, f.fnome, f.indirizzo
            FROM Fornitori f
            JOIN Catalogo c ON c.fid = f.fid
            JOIN Pezzi p ON p.pid = c.pid
            WHERE p.colore = $1
            GROUP BY f.fid, f.fnome, f.indirizzo
            HAVING COUNT(DISTINCT p.pid) = (
                SELECT COUNT(*) FROM Pezzi WHERE colore = $1
            )
            ORDER BY f.fid
            "#,
        )
        .bind(color.to_owned())
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(color, rows = rows.len(), "color-universal suppliers");
        Ok(rows)
    }

    /// The negative condition compares supplier *names*: two suppliers
    /// sharing `supplier_name` count as one.
    async fn parts_exclusive_to(&self, supplier_name: &str) -> Result<Vec<Part>, DbError> {
        let rows = sqlx::query_as::<_, Part>(
            r#"
            SELECT p.pid, p.pnome, p.colore
            FROM Pezzi p
            WHERE EXISTS (
                SELECT 1
                FROM Catalogo c1
                JOIN Fornitori f1 ON f1.fid = c1.fid
                WHERE c1.pid = p.pid
                  AND f1.fnome = $1
            )
            AND NOT EXISTS (
                SELECT 1
                FROM Catalogo c2
                JOIN Fornitori f2 ON f2.fid = c2.fid
                WHERE c2.pid = p.pid
                  AND f2.fnome <> $1
            )
            ORDER BY p.pid
            "#,
        )
        .bind(supplier_name.to_owned())
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(supplier_name, rows = rows.len(), "exclusive parts");
        Ok(rows)
    }

    async fn suppliers_above_part_average(&self) -> Result<Vec<Supplier>, DbError> {
        let rows = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT DISTINCT f.fid, f.fnome, f.indirizzo
            FROM Catalogo c
            JOIN (
                SELECT pid, AVG(costo) AS costo_medio
                FROM Catalogo
                GROUP BY pid
            ) media ON media.pid = c.pid
            JOIN Fornitori f ON f.fid = c.fid
            WHERE c.costo > media.costo_medio
            ORDER BY f.fid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), "suppliers above part average");
        Ok(rows)
    }

    /// Minimum per group as an anti-join: keep a row when no cheaper row
    /// exists for the same part.
    async fn cheapest_offers(&self) -> Result<Vec<CheapestOffer>, DbError> {
        let rows = sqlx::query_as::<_, CheapestOffer>(
            r#"
            SELECT p.pid, p.pnome, p.colore, f.fid, f.fnome,
                   CAST(c.costo AS DOUBLE PRECISION) AS costo
            FROM Catalogo c
            JOIN Pezzi p ON p.pid = c.pid
            JOIN Fornitori f ON f.fid = c.fid
            WHERE NOT EXISTS (
                SELECT 1
                FROM Catalogo c2
                WHERE c2.pid = c.pid
                  AND c2.costo < c.costo
            )
            ORDER BY p.pid, c.costo, f.fid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), "cheapest offers");
        Ok(rows)
    }

    async fn mono_color_suppliers(&self, color: &str) -> Result<Vec<Supplier>, DbError> {
        let rows = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT f.fid, f.fnome, f.indirizzo
            FROM Fornitori f
            WHERE EXISTS (
                SELECT 1
                FROM Catalogo c
                WHERE c.fid = f.fid
            )
            AND NOT EXISTS (
                SELECT 1
                FROM Catalogo c2
                JOIN Pezzi p2 ON p2.pid = c2.pid
                WHERE c2.fid = f.fid
                  AND p2.colore <> $1
            )
            ORDER BY f.fid
            "#,
        )
        .bind(color.to_owned())
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(color, rows = rows.len(), "mono-color suppliers");
        Ok(rows)
    }

    async fn red_and_green_suppliers(&self) -> Result<Vec<RedGreenSupplier>, DbError> {
        let rows = sqlx::query_as::<_, RedGreenSupplier>(
            r#"
            SELECT f.fid, f.fnome, f.indirizzo,
                   COUNT(DISTINCT CASE WHEN p.colore = 'rosso' THEN p.pid END) AS pezzi_rossi,
                   COUNT(DISTINCT CASE WHEN p.colore = 'verde' THEN p.pid END) AS pezzi_verdi
            FROM Fornitori f
            JOIN Catalogo c ON c.fid = f.fid
            JOIN Pezzi p ON p.pid = c.pid
            GROUP BY f.fid, f.fnome, f.indirizzo
            HAVING COUNT(DISTINCT CASE WHEN p.colore = 'rosso' THEN p.pid END) > 0
               AND COUNT(DISTINCT CASE WHEN p.colore = 'verde' THEN p.pid END) > 0
            ORDER BY f.fid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), "red and green suppliers");
        Ok(rows)
    }

    async fn suppliers_with_any_color(
        &self,
        colors: &ColorSet,
    ) -> Result<Vec<Supplier>, DbError> {
        // Placeholders only; the values themselves are bound below.
        let placeholders = (1..=colors.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            r#"
            SELECT DISTINCT f.fid, f.fnome, f.indirizzo
            FROM Catalogo c
            JOIN Pezzi p ON p.pid = c.pid
            JOIN Fornitori f ON f.fid = c.fid
            WHERE p.colore IN ({})
            ORDER BY f.fid
            "#,
            placeholders
        );

        let mut query = sqlx::query_as::<_, Supplier>(&sql);
        for color in colors.as_slice() {
            query = query.bind(*color);
        }
        let rows = query.fetch_all(&self.pool).await?;

        tracing::debug!(colors = ?colors.as_slice(), rows = rows.len(), "suppliers by color set");
        Ok(rows)
    }

    async fn parts_with_min_suppliers(
        &self,
        min_suppliers: i64,
    ) -> Result<Vec<PartSupplierCount>, DbError> {
        let rows = sqlx::query_as::<_, PartSupplierCount>(
            r#"
            SELECT p.pid, p.pnome, p.colore,
                   COUNT(DISTINCT c.fid) AS num_fornitori
            FROM Catalogo c
            JOIN Pezzi p ON p.pid = c.pid
            GROUP BY p.pid, p.pnome, p.colore
            HAVING COUNT(DISTINCT c.fid) >= $1
            ORDER BY num_fornitori DESC, p.pid
            "#,
        )
        .bind(min_suppliers)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(min_suppliers, rows = rows.len(), "parts with min suppliers");
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
