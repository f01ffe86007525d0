use bigdecimal::BigDecimal;
use sqlx::PgConnection;

use kernel::interface::query::FiliaalQuery;
use kernel::interface::update::FiliaalModifier;
use kernel::prelude::entity::{
    Filiaal, FiliaalGemeente, FiliaalId, FiliaalNaam, FiliaalOmzet,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresFiliaalRepository;

#[async_trait::async_trait]
impl FiliaalQuery for PostgresFiliaalRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Filiaal>, KernelError> {
        PgFiliaalInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &FiliaalId,
    ) -> error_stack::Result<Option<Filiaal>, KernelError> {
        PgFiliaalInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl FiliaalModifier for PostgresFiliaalRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        filiaal: &Filiaal,
    ) -> error_stack::Result<FiliaalId, KernelError> {
        PgFiliaalInternal::create(con, filiaal).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        filiaal: &Filiaal,
    ) -> error_stack::Result<(), KernelError> {
        PgFiliaalInternal::update(con, filiaal).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        filiaal_id: &FiliaalId,
    ) -> error_stack::Result<(), KernelError> {
        PgFiliaalInternal::delete(con, filiaal_id).await
    }
}

#[derive(sqlx::FromRow)]
struct FiliaalRow {
    id: i64,
    naam: String,
    gemeente: String,
    omzet: Option<BigDecimal>,
}

impl From<FiliaalRow> for Filiaal {
    fn from(value: FiliaalRow) -> Self {
        Filiaal::new(
            FiliaalId::new(value.id),
            FiliaalNaam::new(value.naam),
            FiliaalGemeente::new(value.gemeente),
            value.omzet.map(FiliaalOmzet::new),
        )
    }
}

pub(in crate::database) struct PgFiliaalInternal;

impl PgFiliaalInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Filiaal>, KernelError> {
        let rows = sqlx::query_as::<_, FiliaalRow>(
            // language=postgresql
            r#"
            SELECT id, naam, gemeente, omzet
            FROM filialen
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Filiaal::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &FiliaalId,
    ) -> error_stack::Result<Option<Filiaal>, KernelError> {
        let row = sqlx::query_as::<_, FiliaalRow>(
            // language=postgresql
            r#"
            SELECT id, naam, gemeente, omzet
            FROM filialen
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Filiaal::from))
    }

    async fn create(
        con: &mut PgConnection,
        filiaal: &Filiaal,
    ) -> error_stack::Result<FiliaalId, KernelError> {
        // language=postgresql
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO filialen (naam, gemeente, omzet)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(filiaal.naam().as_ref())
        .bind(filiaal.gemeente().as_ref())
        .bind(filiaal.omzet().clone().map(BigDecimal::from))
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(FiliaalId::new(id))
    }

    async fn update(
        con: &mut PgConnection,
        filiaal: &Filiaal,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE filialen
            SET naam = $2, gemeente = $3, omzet = $4
            WHERE id = $1
            "#,
        )
        .bind(filiaal.id().as_ref())
        .bind(filiaal.naam().as_ref())
        .bind(filiaal.gemeente().as_ref())
        .bind(filiaal.omzet().clone().map(BigDecimal::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        filiaal_id: &FiliaalId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM filialen
            WHERE id = $1
            "#,
        )
        .bind(filiaal_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::FiliaalQuery;
    use kernel::interface::update::FiliaalModifier;
    use kernel::prelude::entity::{
        Filiaal, FiliaalGemeente, FiliaalId, FiliaalNaam, FiliaalOmzet,
    };
    use kernel::KernelError;

    use crate::database::postgres::filiaal::PostgresFiliaalRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn lifecycle() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;
        let filiaal = Filiaal::new(
            FiliaalId::UNASSIGNED,
            FiliaalNaam::new("test"),
            FiliaalGemeente::new("Gent"),
            Some(FiliaalOmzet::new(
                BigDecimal::from_str("123456789012345678901234567890.123456789").unwrap(),
            )),
        );

        let id = PostgresFiliaalRepository
            .create(&mut connection, &filiaal)
            .await?;
        assert!(id.is_assigned());
        let filiaal = filiaal.with_id(id);

        let found = PostgresFiliaalRepository
            .find_by_id(&mut connection, &id)
            .await?;
        assert_eq!(found, Some(filiaal.clone()));

        let filiaal = filiaal.reconstruct(|f| {
            f.naam = FiliaalNaam::new("test2");
            f.omzet = None;
        });
        PostgresFiliaalRepository
            .update(&mut connection, &filiaal)
            .await?;

        let found = PostgresFiliaalRepository
            .find_all(&mut connection)
            .await?;
        assert!(found.contains(&filiaal));

        PostgresFiliaalRepository
            .delete(&mut connection, &id)
            .await?;
        PostgresFiliaalRepository
            .delete(&mut connection, &id)
            .await?;
        let found = PostgresFiliaalRepository
            .find_by_id(&mut connection, &id)
            .await?;
        assert!(found.is_none());

        connection.roll_back().await?;
        Ok(())
    }
}
