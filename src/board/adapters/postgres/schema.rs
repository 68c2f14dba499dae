//! Diesel schema for the hosted `tasks` table.

diesel::table! {
    /// Task rows, one owner per row.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Status label; not constrained by the table.
        #[max_length = 50]
        status -> Varchar,
        /// Calendar date.
        date -> Date,
        /// Owning user.
        user_id -> Uuid,
    }
}
