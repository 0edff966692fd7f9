use gantry::{Client, Connection, Record, params};
use indoc::indoc;
use std::sync::Arc;

pub(crate) fn records<C: Connection>(client: &Client<C>) {
    #[derive(Record, Clone, Debug, Default, PartialEq)]
    struct UserProfile {
        user_id: i64,
        is_active: bool,
        display_name: String,
        karma: Option<i64>,
    }

    // Setup, `is_active` mixes textual and numeric boolean storage
    client
        .try_exec("DROP TABLE IF EXISTS user_profiles", &[])
        .expect("Failed to drop the user_profiles table");
    client
        .try_exec(
            indoc! {"
                CREATE TABLE user_profiles (
                    user_id BIGINT,
                    is_active BOOLEAN,
                    display_name TEXT,
                    karma BIGINT
                )
            "},
            &[],
        )
        .expect("Failed to create the user_profiles table");
    client
        .try_exec(
            indoc! {"
                INSERT INTO user_profiles (user_id, is_active, display_name, karma) VALUES
                    (1, 'true', 'First', 10),
                    (2, 'false', 'Second', NULL),
                    (3, 1, 'Third', -3)
            "},
            &[],
        )
        .expect("Failed to insert the user profiles");
    let select = "SELECT user_id, is_active, display_name, karma FROM user_profiles";

    // Only the first row binds
    let user: UserProfile = client
        .try_get(&format!("{select} ORDER BY user_id"), &[])
        .expect("Failed to get the first user");
    assert_eq!(
        user,
        UserProfile {
            user_id: 1,
            is_active: true,
            display_name: "First".into(),
            karma: Some(10),
        }
    );

    // Zero rows binds nothing, the default instance comes back
    let user: UserProfile = client
        .try_get(&format!("{select} WHERE user_id = ?1"), params![999i64])
        .expect("Failed to get a missing user");
    assert_eq!(user, UserProfile::default());

    // NULL lands on an optional field as None
    let user: UserProfile = client.get(&format!("{select} WHERE user_id = ?1"), params![2i64]);
    assert_eq!(user.karma, None);
    assert!(!user.is_active);
    assert_eq!(user.display_name, "Second");

    // A column subset binds the matching fields and leaves the rest alone
    let user: UserProfile = client
        .try_get(
            "SELECT display_name FROM user_profiles WHERE user_id = ?1",
            params![3i64],
        )
        .expect("Failed to get the third user");
    assert_eq!(user.display_name, "Third");
    assert_eq!(user.user_id, 0);

    // Collection by value
    let mut users: Vec<UserProfile> = Vec::new();
    client
        .try_get_all(&format!("{select} ORDER BY user_id"), &[], &mut users)
        .expect("Failed to get all the users");
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].user_id, 1);
    assert_eq!(users[1].karma, None);
    assert!(users[2].is_active);

    // Every element is a distinct instance
    users[0].display_name = "Changed".into();
    assert_eq!(users[1].display_name, "Second");

    // Collection of shared pointers still allocates one record per row
    let mut shared: Vec<Arc<UserProfile>> = Vec::new();
    client
        .try_get_all(&format!("{select} ORDER BY user_id"), &[], &mut shared)
        .expect("Failed to get all the users as Arc");
    assert_eq!(shared.len(), 3);
    assert!(!Arc::ptr_eq(&shared[0], &shared[1]));
    assert_eq!(*shared[1], users[1]);

    // Boxed elements
    let mut boxed: Vec<Box<UserProfile>> = Vec::new();
    client.get_all(&format!("{select} WHERE user_id = ?1"), params![1i64], &mut boxed);
    assert_eq!(boxed.len(), 1);
    assert_eq!(boxed[0].user_id, 1);

    // Renamed and underscore prefixed fields resolve their column
    #[derive(Record, Debug, Default)]
    struct Renamed {
        #[record(name = "display_name")]
        title: String,
        _user_id: i64,
    }
    let renamed: Renamed = client
        .try_get(
            "SELECT display_name, user_id FROM user_profiles WHERE user_id = ?1",
            params![1i64],
        )
        .expect("Failed to get the renamed record");
    assert_eq!(renamed.title, "First");
    assert_eq!(renamed._user_id, 1);
}
