use std::sync::Arc;

use quill::models::CreatePostInput;
use quill::store::{FileStore, MemoryStore, PostStore, StringStore, POSTS_KEY};
use speculate2::speculate;

fn input(title: &str, author: &str, content: &str) -> CreatePostInput {
    CreatePostInput {
        title: title.to_string(),
        author: author.to_string(),
        content: content.to_string(),
    }
}

speculate! {
    describe "round trip" {
        it "reopens with the same posts, newest first" {
            let backend = Arc::new(MemoryStore::new());
            let store = PostStore::open(backend.clone()).expect("Failed to open store");

            store.create_post(input("First", "Ada", "a")).expect("Failed to create post");
            store.create_post(input("Second", "Grace", "b")).expect("Failed to create post");

            let reopened = PostStore::open(backend).expect("Failed to reopen store");
            let all = reopened.get_all_posts().expect("Query failed");
            assert_eq!(all.len(), 2);
            assert_eq!(all[0].title, "Second");
            assert_eq!(all[1].title, "First");
        }

        it "sorts persisted posts by date descending on load" {
            // Mirror seeded out of order; load re-sorts.
            let backend = Arc::new(MemoryStore::new());
            let raw = r#"[
                {"id":"11111111-1111-4111-8111-111111111111","title":"Oldest","author":"Ada","content":"a","date":"2023-01-01T00:00:00Z"},
                {"id":"22222222-2222-4222-8222-222222222222","title":"Newest","author":"Ada","content":"b","date":"2025-06-01T12:00:00Z"},
                {"id":"33333333-3333-4333-8333-333333333333","title":"Middle","author":"Ada","content":"c","date":"2024-03-15T08:30:00Z"}
            ]"#;
            backend.write(POSTS_KEY, raw).expect("Failed to seed backend");

            let store = PostStore::open(backend).expect("Failed to open store");
            let titles: Vec<String> = store
                .get_all_posts()
                .expect("Query failed")
                .into_iter()
                .map(|p| p.title)
                .collect();

            assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
        }

        it "treats an absent key as an empty collection" {
            let store = PostStore::open(MemoryStore::new()).expect("Failed to open store");
            assert!(store.get_all_posts().expect("Query failed").is_empty());
        }
    }

    describe "corrupt data" {
        it "loads as an empty collection" {
            let backend = Arc::new(MemoryStore::new());
            backend.write(POSTS_KEY, "{ this is not json").expect("Failed to seed backend");

            let store = PostStore::open(backend).expect("Failed to open store");
            assert!(store.get_all_posts().expect("Query failed").is_empty());
        }

        it "overwrites the corrupt value on the next mutation" {
            let backend = Arc::new(MemoryStore::new());
            backend.write(POSTS_KEY, "[not json]").expect("Failed to seed backend");

            let store = PostStore::open(backend.clone()).expect("Failed to open store");
            store.create_post(input("Fresh start", "Ada", "text")).expect("Failed to create post");

            let reopened = PostStore::open(backend).expect("Failed to reopen store");
            let all = reopened.get_all_posts().expect("Query failed");
            assert_eq!(all.len(), 1);
            assert_eq!(all[0].title, "Fresh start");
        }
    }

    describe "file store" {
        it "persists across reopen from the same directory" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");

            {
                let backend = FileStore::open(dir.path().to_path_buf()).expect("Failed to open file store");
                let store = PostStore::open(backend).expect("Failed to open store");
                store.create_post(input("On disk", "Ada", "durable")).expect("Failed to create post");
            }

            let backend = FileStore::open(dir.path().to_path_buf()).expect("Failed to open file store");
            let store = PostStore::open(backend).expect("Failed to open store");
            let all = store.get_all_posts().expect("Query failed");
            assert_eq!(all.len(), 1);
            assert_eq!(all[0].title, "On disk");
        }

        it "writes the collection as a JSON array under the posts key" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let backend = FileStore::open(dir.path().to_path_buf()).expect("Failed to open file store");
            let store = PostStore::open(backend).expect("Failed to open store");

            store.create_post(input("Visible", "Ada", "inspect me")).expect("Failed to create post");

            let raw = std::fs::read_to_string(dir.path().join("posts.json")).expect("Mirror file missing");
            let parsed: serde_json::Value = serde_json::from_str(&raw).expect("Mirror is not valid JSON");
            assert!(parsed.is_array());
            assert_eq!(parsed.as_array().expect("Not an array").len(), 1);
        }
    }
}
