use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::lead::{Lead, NewLead};
use crate::models::lead::{Lead as DbLead, NewLead as DbNewLead};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, LeadReader, LeadWriter};
use crate::schema::leads;

impl LeadReader for DieselRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        let mut conn = self.conn()?;

        let rows = leads::table
            .order((leads::created_at.desc(), leads::id.desc()))
            .load::<DbLead>(&mut conn)?;

        rows.into_iter()
            .map(|row| Lead::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn count_leads(&self, since: Option<NaiveDateTime>) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let mut query = leads::table.into_boxed();
        if let Some(since) = since {
            query = query.filter(leads::created_at.ge(since));
        }

        let total = query.count().get_result::<i64>(&mut conn)?;

        usize::try_from(total).map_err(|e| RepositoryError::Unexpected(e.to_string()))
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        let mut conn = self.conn()?;

        let row = DbNewLead::new(new_lead, Utc::now().naive_utc());

        let created = diesel::insert_into(leads::table)
            .values(&row)
            .get_result::<DbLead>(&mut conn)?;

        Ok(Lead::try_from(created)?)
    }
}
