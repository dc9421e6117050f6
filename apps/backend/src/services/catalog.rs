//! Mock resource catalog standing in for the YouTube/GitHub lookup.
//!
//! Resources are keyed by topic and filtered to the tiers a user's level
//! admits, then ranked by quality. The route layer owns persistence and
//! seen-id filtering; everything here is pure.

use chrono::Utc;

use crate::models::{
    Difficulty, RepoMetadata, Resource, ResourceKind, ResourceMetadata, VideoMetadata,
};

/// Topics offered during onboarding.
pub const AVAILABLE_TOPICS: &[&str] = &["React", "System Design", "Rust", "Algo Trading"];

/// Resources for a single topic, quality-ranked, restricted to the
/// tiers this level admits. Unknown topics yield an empty batch.
pub fn resources_for_topic(topic: &str, level: Difficulty) -> Vec<Resource> {
    let mut resources: Vec<Resource> = catalog()
        .into_iter()
        .filter(|r| r.tags.iter().any(|t| t == topic))
        .filter(|r| level.admits(r.difficulty.unwrap_or_default()))
        .collect();

    resources.sort_by(|a, b| b.quality_score.total_cmp(&a.quality_score));
    resources
}

/// Union of all goal topics, deduplicated by id and quality-ranked.
pub fn resources_for_goals(goals: &[String], level: Difficulty) -> Vec<Resource> {
    let mut resources: Vec<Resource> = Vec::new();
    for goal in goals {
        for resource in resources_for_topic(goal, level) {
            if !resources.iter().any(|r| r.id == resource.id) {
                resources.push(resource);
            }
        }
    }

    resources.sort_by(|a, b| b.quality_score.total_cmp(&a.quality_score));
    resources
}

fn video(
    id: &str,
    title: &str,
    video_id: &str,
    duration: &str,
    minutes: u32,
    channel: &str,
    views: u64,
    description: &str,
    quality: f64,
    difficulty: Difficulty,
    tags: &[&str],
) -> Resource {
    let now = Utc::now();
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        kind: ResourceKind::Video,
        url: format!("https://www.youtube.com/watch?v={video_id}"),
        thumbnail_url: Some(format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")),
        duration: Some(duration.to_string()),
        duration_minutes: Some(minutes),
        quality_score: quality,
        difficulty: Some(difficulty),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        metadata: ResourceMetadata::Video(VideoMetadata {
            channel_name: channel.to_string(),
            view_count: Some(views),
            description: Some(description.to_string()),
        }),
        created_at: now,
        updated_at: now,
    }
}

fn repo(
    id: &str,
    name: &str,
    owner: &str,
    stars: u64,
    language: &str,
    description: &str,
    minutes: u32,
    quality: f64,
    difficulty: Difficulty,
    tags: &[&str],
) -> Resource {
    let now = Utc::now();
    Resource {
        id: id.to_string(),
        title: name.to_string(),
        kind: ResourceKind::Repo,
        url: format!("https://github.com/{owner}/{name}"),
        thumbnail_url: Some(format!("https://opengraph.githubassets.com/1/{owner}/{name}")),
        duration: None,
        duration_minutes: Some(minutes),
        quality_score: quality,
        difficulty: Some(difficulty),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        metadata: ResourceMetadata::Repo(RepoMetadata {
            owner: owner.to_string(),
            stars: Some(stars),
            language: Some(language.to_string()),
            description: Some(description.to_string()),
        }),
        created_at: now,
        updated_at: now,
    }
}

/// The full mock catalog. Also loaded into the database by the `seed`
/// binary so swipe and playlist rows have resources to reference.
pub fn catalog() -> Vec<Resource> {
    vec![
        // React
        video(
            "react-001",
            "Advanced React Patterns: Compound Components",
            "hEGg-3pIHlE",
            "32:15",
            32,
            "Jack Herrington",
            450_000,
            "Master compound component patterns in React",
            9.2,
            Difficulty::Advanced,
            &["React", "Patterns", "Advanced"],
        ),
        video(
            "react-003",
            "React useEffect Explained for Beginners",
            "0ZJgIjIuY7U",
            "18:45",
            18,
            "Web Dev Simplified",
            920_000,
            "Everything you need to know about useEffect",
            9.0,
            Difficulty::Beginner,
            &["React", "Hooks", "Beginner"],
        ),
        video(
            "react-004",
            "React State Management: Redux vs Zustand vs Jotai",
            "5-1LM2NySR0",
            "28:10",
            28,
            "Fireship",
            650_000,
            "Comparing modern state management solutions",
            9.1,
            Difficulty::Intermediate,
            &["React", "State Management", "Zustand"],
        ),
        repo(
            "react-005",
            "react-hook-form",
            "react-hook-form",
            38_000,
            "TypeScript",
            "Performant, flexible and extensible forms with easy-to-use validation",
            45,
            9.5,
            Difficulty::Intermediate,
            &["React", "Forms", "Validation"],
        ),
        // System Design
        video(
            "sd-001",
            "System Design Interview: A Step-By-Step Guide",
            "i7twT3x5yv8",
            "35:22",
            35,
            "ByteByteGo",
            2_500_000,
            "Learn the fundamentals of system design interviews",
            9.5,
            Difficulty::Beginner,
            &["System Design", "Interview", "Fundamentals"],
        ),
        video(
            "sd-002",
            "Designing Instagram: System Design Interview",
            "QmX2NPkJTKg",
            "28:15",
            28,
            "Gaurav Sen",
            1_800_000,
            "Complete walkthrough of designing Instagram",
            9.2,
            Difficulty::Intermediate,
            &["System Design", "Instagram", "Social Media"],
        ),
        repo(
            "sd-003",
            "system-design-primer",
            "donnemartin",
            245_000,
            "Python",
            "Learn to design large-scale systems",
            120,
            9.8,
            Difficulty::Beginner,
            &["System Design", "Primer", "Fundamentals"],
        ),
        video(
            "sd-006",
            "CAP Theorem Simplified",
            "BHqjEjzAicg",
            "15:18",
            15,
            "Hussein Nasser",
            620_000,
            "Understanding CAP theorem with examples",
            8.8,
            Difficulty::Beginner,
            &["System Design", "CAP", "Distributed Systems"],
        ),
        // Rust
        video(
            "rust-001",
            "Rust for TypeScript Developers",
            "Z3xPIYHKSoI",
            "42:30",
            42,
            "ThePrimeagen",
            320_000,
            "Learn Rust coming from TypeScript",
            9.3,
            Difficulty::Beginner,
            &["Rust", "TypeScript", "Beginner"],
        ),
        video(
            "rust-002",
            "Advanced Rust Concurrency Patterns",
            "rMGWeSjctlY",
            "55:00",
            55,
            "Jon Gjengset",
            180_000,
            "Deep dive into async Rust",
            9.5,
            Difficulty::Advanced,
            &["Rust", "Concurrency", "Async"],
        ),
        repo(
            "rust-003",
            "rustlings",
            "rust-lang",
            48_000,
            "Rust",
            "Small exercises to get you used to reading and writing Rust",
            180,
            9.6,
            Difficulty::Beginner,
            &["Rust", "Exercises", "Beginner"],
        ),
        video(
            "rust-005",
            "Zero-Cost Abstractions in Rust",
            "HiWkMFE8uOc",
            "38:00",
            38,
            "No Boilerplate",
            420_000,
            "How Rust achieves zero-cost abstractions",
            9.2,
            Difficulty::Intermediate,
            &["Rust", "Performance", "Abstractions"],
        ),
        // Algo Trading
        video(
            "algo-001",
            "Algorithmic Trading Course for Beginners",
            "xfzGZB4HhEE",
            "65:00",
            65,
            "freeCodeCamp",
            1_200_000,
            "Complete introduction to algo trading with Python",
            9.2,
            Difficulty::Beginner,
            &["Algo Trading", "Python", "Beginner"],
        ),
        video(
            "algo-002",
            "Building a Trading Bot in Python",
            "GdlFhF6gjKo",
            "48:30",
            48,
            "Part Time Larry",
            450_000,
            "Create your first trading bot",
            9.0,
            Difficulty::Intermediate,
            &["Algo Trading", "Python", "Bot"],
        ),
        repo(
            "algo-003",
            "freqtrade",
            "freqtrade",
            25_000,
            "Python",
            "Free, open source crypto trading bot",
            180,
            9.4,
            Difficulty::Intermediate,
            &["Algo Trading", "Crypto", "Bot"],
        ),
        video(
            "algo-005",
            "High Frequency Trading: The Basics",
            "kFQJNeQDDHA",
            "28:00",
            28,
            "Quantitative Trading",
            320_000,
            "Introduction to HFT concepts",
            8.8,
            Difficulty::Advanced,
            &["Algo Trading", "HFT", "Advanced"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let all = catalog();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn beginners_only_see_beginner_material() {
        let resources = resources_for_topic("Rust", Difficulty::Beginner);
        assert!(!resources.is_empty());
        assert!(resources
            .iter()
            .all(|r| r.difficulty == Some(Difficulty::Beginner)));
    }

    #[test]
    fn advanced_users_see_every_tier() {
        let all_rust = catalog()
            .into_iter()
            .filter(|r| r.tags.iter().any(|t| t == "Rust"))
            .count();
        assert_eq!(
            resources_for_topic("Rust", Difficulty::Advanced).len(),
            all_rust
        );
    }

    #[test]
    fn results_are_quality_ranked() {
        let resources = resources_for_topic("System Design", Difficulty::Advanced);
        for pair in resources.windows(2) {
            assert!(pair[0].quality_score >= pair[1].quality_score);
        }
    }

    #[test]
    fn goals_union_without_duplicates() {
        let goals = vec!["Rust".to_string(), "Rust".to_string(), "React".to_string()];
        let resources = resources_for_goals(&goals, Difficulty::Advanced);
        let mut ids: Vec<_> = resources.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), resources.len());
        assert!(resources.iter().any(|r| r.tags.contains(&"React".to_string())));
    }

    #[test]
    fn unknown_topic_is_empty() {
        assert!(resources_for_topic("Basket Weaving", Difficulty::Advanced).is_empty());
    }

    #[test]
    fn every_topic_has_beginner_material() {
        for topic in AVAILABLE_TOPICS {
            assert!(
                !resources_for_topic(topic, Difficulty::Beginner).is_empty(),
                "no beginner resources for {topic}"
            );
        }
    }
}
