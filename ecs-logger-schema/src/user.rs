field_set! {
    /// The `user.*` field set.
    pub struct User {
        /// Name of the directory the user is a member of.
        pub domain: String,
        /// User email address.
        pub email: String,
        /// User's full name.
        pub full_name: String,
        /// Unique user hash to correlate information for a user in anonymized form.
        pub hash: String,
        /// Unique identifier of the user.
        pub id: String,
        /// Short name or login of the user.
        pub name: String,
        /// Array of user roles at the time of the event.
        pub roles: Vec<String>,
    }

    /// The `organization.*` field set.
    pub struct Organization {
        /// Unique identifier for the organization.
        pub id: String,
        /// Organization name.
        pub name: String,
    }
}
