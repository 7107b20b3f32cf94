//! Demo data for local runs and tests.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use blog_types::{NewAuthor, NewPost, PostId};

use crate::error::SdkResult;
use crate::repository::Blog;

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances"];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "magna", "aliqua",
];

fn pick<R: Rng>(rng: &mut R, from: &[&'static str]) -> &'static str {
    from.choose(rng).copied().unwrap_or("lorem")
}

fn words<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count).map(|_| pick(rng, WORDS)).collect::<Vec<_>>().join(" ")
}

/// A random create request: short title, one-paragraph content, a named
/// author, and a `created` date up to a year in the future.
pub fn generate_post<R: Rng>(rng: &mut R) -> NewPost {
    let title_len = rng.gen_range(2..=4);
    let title = words(rng, title_len);
    let sentences = rng.gen_range(3..=6);
    let content = (0..sentences)
        .map(|_| {
            let n = rng.gen_range(5..=10);
            format!("{}.", words(rng, n))
        })
        .collect::<Vec<_>>()
        .join(" ");
    let author = NewAuthor::new(pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));

    let mut post = NewPost::new(title, content, author);
    post.created = Some(Utc::now() + Duration::days(rng.gen_range(1..=365)));
    post
}

impl Blog {
    /// Insert `count` generated posts and return their ids in order.
    pub fn seed_posts(&self, count: usize) -> SdkResult<Vec<PostId>> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                let created = self.create_post(generate_post(&mut rng))?;
                Ok(created.post().id)
            })
            .collect()
    }
}
