use std::future::Future;
use std::pin::Pin;

use actix_web::HttpRequest;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::debug;

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::trace_ctx;

/// Future returned by a `with_txn` body; it may borrow the transaction.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'a>>;

/// Execute a function within a database transaction.
///
/// Begins a transaction on the state's connection, runs the closure, then
/// applies the process `TxnPolicy` on Ok and rolls back on Err. Every store
/// operation of one request goes through the same transaction so that a
/// failed step leaves nothing behind.
///
/// ```ignore
/// let games = with_txn(Some(&req), &state, |txn| {
///     Box::pin(async move { service.list_active_games(txn, owner).await })
/// })
/// .await?;
/// ```
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let db = require_db(state)?;

    if let Some(r) = req {
        debug!(trace_id = %trace_ctx::trace_id(), path = %r.path(), "begin transaction");
    }

    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
