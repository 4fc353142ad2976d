mod contact_message;
mod status_check;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "folio",
    "m0001",
    vec_box![],
    vec_box![
        contact_message::CreateTable,
        contact_message::CreateIdx1,
        contact_message::CreateIdx2,
        status_check::CreateTable
    ]
);
