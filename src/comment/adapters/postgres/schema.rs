//! Diesel schema for comment persistence.

diesel::table! {
    /// User-submitted comment records.
    comments (id) {
        /// Comment identifier.
        id -> Uuid,
        /// Unique commenter email address.
        #[max_length = 254]
        email -> Varchar,
        /// Commenter display name.
        #[max_length = 50]
        name -> Varchar,
        /// Comment text, stored trimmed.
        #[max_length = 255]
        comment -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
