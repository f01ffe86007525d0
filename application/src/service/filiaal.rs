use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnFiliaalQuery, FiliaalQuery};
use kernel::interface::update::{DependOnFiliaalModifier, FiliaalModifier};
use kernel::KernelError;

use crate::transfer::{
    CreateFiliaalDto, DeleteFiliaalDto, FiliaalDto, GetFiliaalDto, UpdateFiliaalDto,
};

#[async_trait::async_trait]
pub trait GetFiliaalService: 'static + Sync + Send + DependOnFiliaalQuery {
    async fn get_all_filialen(&self) -> error_stack::Result<Vec<FiliaalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filialen = self.filiaal_query().find_all(&mut connection).await?;

        Ok(filialen.into_iter().map(FiliaalDto::from).collect())
    }

    async fn get_filiaal(
        &self,
        dto: GetFiliaalDto,
    ) -> error_stack::Result<Option<FiliaalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filiaal = self
            .filiaal_query()
            .find_by_id(&mut connection, &dto.id)
            .await?;

        Ok(filiaal.map(FiliaalDto::from))
    }
}

impl<T> GetFiliaalService for T where T: DependOnFiliaalQuery {}

#[async_trait::async_trait]
pub trait CreateFiliaalService: 'static + Sync + Send + DependOnFiliaalModifier {
    async fn create_filiaal(
        &self,
        dto: CreateFiliaalDto,
    ) -> error_stack::Result<FiliaalDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = self
            .filiaal_modifier()
            .create(&mut connection, &dto.filiaal)
            .await?;

        connection.commit().await?;
        tracing::debug!("Created filiaal {:?}", id);

        Ok(FiliaalDto::from(dto.filiaal.with_id(id)))
    }
}

impl<T> CreateFiliaalService for T where T: DependOnFiliaalModifier {}

#[async_trait::async_trait]
pub trait UpdateFiliaalService: 'static + Sync + Send + DependOnFiliaalModifier {
    async fn update_filiaal(&self, dto: UpdateFiliaalDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.filiaal_modifier()
            .update(&mut connection, &dto.filiaal)
            .await?;

        connection.commit().await?;
        tracing::debug!("Updated filiaal {:?}", dto.filiaal.id());

        Ok(())
    }
}

impl<T> UpdateFiliaalService for T where T: DependOnFiliaalModifier {}

#[async_trait::async_trait]
pub trait DeleteFiliaalService: 'static + Sync + Send + DependOnFiliaalModifier {
    async fn delete_filiaal(&self, dto: DeleteFiliaalDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.filiaal_modifier()
            .delete(&mut connection, &dto.id)
            .await?;

        connection.commit().await?;
        tracing::debug!("Deleted filiaal {:?}", dto.id);

        Ok(())
    }
}

impl<T> DeleteFiliaalService for T where T: DependOnFiliaalModifier {}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use driver::database::InMemoryDatabase;
    use kernel::prelude::entity::{
        Filiaal, FiliaalGemeente, FiliaalId, FiliaalNaam, FiliaalOmzet,
    };
    use kernel::KernelError;

    use crate::service::{
        CreateFiliaalService, DeleteFiliaalService, GetFiliaalService, UpdateFiliaalService,
    };
    use crate::transfer::{
        CreateFiliaalDto, DeleteFiliaalDto, FiliaalDto, GetFiliaalDto, UpdateFiliaalDto,
    };

    fn filiaal(naam: &str, gemeente: &str, omzet: Option<BigDecimal>) -> Filiaal {
        Filiaal::new(
            FiliaalId::UNASSIGNED,
            FiliaalNaam::new(naam),
            FiliaalGemeente::new(gemeente),
            omzet.map(FiliaalOmzet::new),
        )
    }

    #[tokio::test]
    async fn create_then_find() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let omzet = BigDecimal::from_str("9876543.2101").ok();

        let created = db
            .create_filiaal(CreateFiliaalDto {
                filiaal: filiaal("Kortrijk", "Kortrijk", omzet.clone()),
            })
            .await?;
        assert!(created.id > 0);

        let found = db
            .get_filiaal(GetFiliaalDto {
                id: FiliaalId::new(created.id),
            })
            .await?;
        assert_eq!(
            found,
            Some(FiliaalDto {
                id: created.id,
                naam: "Kortrijk".to_string(),
                gemeente: "Kortrijk".to_string(),
                omzet,
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_empty() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let found = db
            .get_filiaal(GetFiliaalDto {
                id: FiliaalId::new(42),
            })
            .await?;
        assert!(found.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_everything() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let created = db
            .create_filiaal(CreateFiliaalDto {
                filiaal: filiaal("Oud", "Aalst", BigDecimal::from_str("1").ok()),
            })
            .await?;
        let id = FiliaalId::new(created.id);

        db.update_filiaal(UpdateFiliaalDto {
            filiaal: filiaal("Nieuw", "Mechelen", None).with_id(id),
        })
        .await?;

        let found = db.get_filiaal(GetFiliaalDto { id }).await?;
        assert_eq!(
            found,
            Some(FiliaalDto {
                id: created.id,
                naam: "Nieuw".to_string(),
                gemeente: "Mechelen".to_string(),
                omzet: None,
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let created = db
            .create_filiaal(CreateFiliaalDto {
                filiaal: filiaal("Hasselt", "Hasselt", None),
            })
            .await?;
        let id = FiliaalId::new(created.id);

        db.delete_filiaal(DeleteFiliaalDto { id }).await?;
        db.delete_filiaal(DeleteFiliaalDto { id }).await?;

        assert!(db.get_filiaal(GetFiliaalDto { id }).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn get_all_in_id_order() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        for naam in ["Antwerpen", "Brussel", "Leuven"] {
            db.create_filiaal(CreateFiliaalDto {
                filiaal: filiaal(naam, naam, None),
            })
            .await?;
        }

        let all = db.get_all_filialen().await?;
        let names = all.iter().map(|f| f.naam.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Antwerpen", "Brussel", "Leuven"]);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
        Ok(())
    }
}
