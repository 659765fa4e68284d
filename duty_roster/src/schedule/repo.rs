use chrono::{Datelike, NaiveDate};
use diesel::prelude::*;

use crate::{
    dates,
    models::{NewRosterPeriod, NewShiftAssignment, Person, ShiftAssignment},
    schedule::{DAY_CAPACITY, RepoError, RepoResult, ScheduleRepo},
};

/// Repository for managing the duty schedule in a SQLite database.
pub struct SqliteRepo;

impl SqliteRepo {
    /// Construct the repository (stateless; the connection is passed per call).
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqliteRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleRepo for SqliteRepo {
    fn list_personnel(&self, conn: &mut diesel::SqliteConnection) -> RepoResult<Vec<Person>> {
        use crate::schema::personnel::dsl as p;

        let rows = p::personnel
            .order(p::name.asc())
            .select(Person::as_select())
            .load(conn)?;
        Ok(rows)
    }

    fn list_assignments(
        &self,
        conn: &mut diesel::SqliteConnection,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> RepoResult<Vec<ShiftAssignment>> {
        use crate::schema::shift_assignment::dsl as sa;

        if window_end < window_start {
            return Ok(vec![]);
        }

        // ISO date strings order lexicographically, so BETWEEN on TEXT is the
        // inclusive day window.
        let lo = dates::format_service_date(window_start);
        let hi = dates::format_service_date(window_end);

        let rows = sa::shift_assignment
            .filter(sa::service_date.between(lo, hi))
            .order(sa::service_date.asc())
            .select(ShiftAssignment::as_select())
            .load(conn)?;
        Ok(rows)
    }

    fn ensure_period(
        &self,
        conn: &mut diesel::SqliteConnection,
        year: i32,
        month: u32,
    ) -> RepoResult<i32> {
        use crate::schema::roster_period::dsl as rp;

        let (start, end) = dates::month_bounds(year, month)?;
        let start_s = dates::format_service_date(start);
        let end_s = dates::format_service_date(end);

        if let Some(existing) = rp::roster_period
            .filter(rp::start_date.eq(&start_s).and(rp::end_date.eq(&end_s)))
            .select(rp::id)
            .first::<i32>(conn)
            .optional()?
        {
            return Ok(existing);
        }

        let title = dates::month_title(start);
        let period_id = diesel::insert_into(rp::roster_period)
            .values(NewRosterPeriod {
                title: &title,
                start_date: &start_s,
                end_date: &end_s,
            })
            .returning(rp::id)
            .get_result::<i32>(conn)?;

        tracing::debug!(period_id, %title, "created roster period");
        Ok(period_id)
    }

    fn assign(
        &self,
        conn: &mut diesel::SqliteConnection,
        id_number: &str,
        date: NaiveDate,
        role: Option<&str>,
    ) -> RepoResult<i32> {
        use crate::schema::personnel::dsl as p;
        use crate::schema::shift_assignment::dsl as sa;

        conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
            let date_s = dates::format_service_date(date);

            let person = p::personnel
                .filter(p::id_number.eq(id_number))
                .select(Person::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| RepoError::PersonNotFound {
                    id_number: id_number.to_string(),
                })?;

            let duplicate = sa::shift_assignment
                .filter(sa::person_id.eq(person.id).and(sa::service_date.eq(&date_s)))
                .select(sa::id)
                .first::<i32>(conn)
                .optional()?;
            if duplicate.is_some() {
                return Err(RepoError::AlreadyAssigned {
                    id_number: id_number.to_string(),
                    date,
                }
                .into());
            }

            let held: i64 = sa::shift_assignment
                .filter(sa::service_date.eq(&date_s))
                .count()
                .get_result(conn)?;
            if held as usize >= DAY_CAPACITY {
                return Err(RepoError::DayFull {
                    date,
                    capacity: DAY_CAPACITY,
                }
                .into());
            }

            let period_id = self.ensure_period(conn, date.year(), date.month())?;

            let assignment_id = diesel::insert_into(sa::shift_assignment)
                .values(NewShiftAssignment {
                    period_id,
                    person_id: person.id,
                    service_date: &date_s,
                    role,
                    notes: None,
                })
                .returning(sa::id)
                .get_result::<i32>(conn)?;

            tracing::debug!(assignment_id, id_number, date = %date_s, "assigned shift");
            Ok(assignment_id)
        })
    }

    fn unassign(
        &self,
        conn: &mut diesel::SqliteConnection,
        id_number: &str,
        date: NaiveDate,
    ) -> RepoResult<bool> {
        use crate::schema::personnel::dsl as p;
        use crate::schema::shift_assignment::dsl as sa;

        let person_id = match p::personnel
            .filter(p::id_number.eq(id_number))
            .select(p::id)
            .first::<i32>(conn)
            .optional()?
        {
            Some(id) => id,
            None => return Ok(false),
        };

        let date_s = dates::format_service_date(date);
        let n = diesel::delete(
            sa::shift_assignment
                .filter(sa::person_id.eq(person_id).and(sa::service_date.eq(&date_s))),
        )
        .execute(conn)?;

        Ok(n > 0)
    }
}
