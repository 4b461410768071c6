//! Transaction management utilities.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Begins an IMMEDIATE transaction.
    ///
    /// The write lock is taken up front, so a competing writer surfaces as
    /// [`crate::Error::LockTimeout`] here rather than halfway through. The
    /// transaction rolls back when dropped without `commit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Database;
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let count = Database::count_bookings(&tx).unwrap();
    /// tx.commit().unwrap();
    /// assert_eq!(count, 0);
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let busy = self.config().busy_timeout;
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(ref sqlite_err, _)
                    if sqlite_err.code == rusqlite::ErrorCode::DatabaseBusy =>
                {
                    crate::Error::LockTimeout {
                        seconds: busy.as_secs(),
                    }
                }
                other => other.into(),
            })
    }

    /// Runs `f` inside one IMMEDIATE transaction.
    ///
    /// Commits when `f` succeeds; rolls back when it fails.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or an error if the transaction cannot be
    /// started or committed.
    pub fn with_transaction<T>(
        &mut self,
        f: impl FnOnce(&Transaction<'_>) -> Result<T>,
    ) -> Result<T> {
        let tx = self.begin_transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_booking, create_test_database};
    use crate::Error;

    #[test]
    fn test_with_transaction_commits() {
        let mut db = create_test_database();
        db.with_transaction(|tx| {
            Database::insert_booking(tx, &create_test_booking("AAAAAAAA", "1A"))?;
            Database::insert_booking(tx, &create_test_booking("BBBBBBBB", "1B"))
        })
        .unwrap();

        assert_eq!(Database::count_bookings(db.connection()).unwrap(), 2);
    }

    #[test]
    fn test_with_transaction_rolls_back_on_error() {
        let mut db = create_test_database();
        let result = db.with_transaction(|tx| {
            Database::insert_booking(tx, &create_test_booking("AAAAAAAA", "1A"))?;
            Database::insert_booking(tx, &create_test_booking("AAAAAAAA", "1B"))
        });

        assert!(matches!(result, Err(Error::DuplicateReference { .. })));
        assert_eq!(Database::count_bookings(db.connection()).unwrap(), 0);
    }

    #[test]
    fn test_dropped_transaction_rolls_back() {
        let mut db = create_test_database();
        {
            let tx = db.begin_transaction().unwrap();
            Database::insert_booking(&tx, &create_test_booking("AAAAAAAA", "1A")).unwrap();
        }
        assert_eq!(Database::count_bookings(db.connection()).unwrap(), 0);
    }
}
