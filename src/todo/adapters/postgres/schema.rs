//! Diesel schema for to-do persistence.

diesel::table! {
    /// To-do item records.
    todo_items (id) {
        /// Surrogate identifier.
        id -> Int8,
        /// Item title.
        #[max_length = 70]
        title -> Varchar,
        /// Item description.
        #[max_length = 500]
        description -> Varchar,
        /// Completion percentage in `0..=100`.
        percentage_done -> Int2,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Expiration timestamp.
        expiration -> Timestamptz,
        /// Completion flag.
        is_done -> Bool,
    }
}
