//! Community engagement over raw posts and comments

use crate::analysis::result::CommunityEngagement;
use crate::analysis::result::EngagementLevel;
use crate::analysis::result::Facet;
use crate::analysis::statistics::ratio;
use crate::models::RawUserData;

pub const UNKNOWN_COMMUNITY: &str = "unknown";

pub fn engagement_level(avg_score: f64, activity_count: usize) -> EngagementLevel {
    if avg_score > 50.0 && activity_count > 20 {
        EngagementLevel::High
    } else if avg_score > 10.0 && activity_count > 10 {
        EngagementLevel::Moderate
    } else {
        EngagementLevel::Low
    }
}

pub fn analyze_community(data: &RawUserData, top_n: usize) -> Facet<CommunityEngagement> {
    let total = data.activity_count();
    if total == 0 {
        return Facet::Empty;
    }

    // first-appearance order doubles as the tie-break for the ranking below
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut total_score: i64 = 0;
    for (_, item) in data.activities() {
        let community = item.subreddit.as_deref().unwrap_or(UNKNOWN_COMMUNITY);
        match counts.iter_mut().find(|(name, _)| name == community) {
            Some((_, count)) => *count += 1,
            None => counts.push((community.to_string(), 1)),
        }
        total_score = total_score.saturating_add(item.score);
    }

    let community_diversity = counts.len();
    let mut top_communities = counts;
    top_communities.sort_by(|a, b| b.1.cmp(&a.1));
    top_communities.truncate(top_n);

    let avg_score = ratio(total_score as f64, total as f64);

    Facet::Ready(CommunityEngagement {
        community_diversity,
        top_communities,
        avg_score,
        total_score,
        comment_ratio: ratio(data.comments.len() as f64, total as f64),
        engagement_level: engagement_level(avg_score, total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawItem;

    fn item(community: Option<&str>, score: i64) -> RawItem {
        RawItem {
            subreddit: community.map(str::to_string),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_activity() {
        assert!(analyze_community(&RawUserData::default(), 5).is_empty());
    }

    #[test]
    fn test_counts_and_ratios() {
        let data = RawUserData {
            posts: vec![item(Some("rust"), 10), item(Some("golang"), -4)],
            comments: vec![item(Some("rust"), 2), item(None, 0)],
            ..Default::default()
        };
        let engagement = analyze_community(&data, 5);
        let engagement = engagement.get().unwrap();
        assert_eq!(engagement.community_diversity, 3);
        assert_eq!(
            engagement.top_communities,
            vec![
                ("rust".to_string(), 2),
                ("golang".to_string(), 1),
                ("unknown".to_string(), 1)
            ]
        );
        assert_eq!(engagement.total_score, 8);
        assert!((engagement.avg_score - 2.0).abs() < 1e-12);
        assert!((engagement.comment_ratio - 0.5).abs() < 1e-12);
        assert_eq!(engagement.engagement_level, EngagementLevel::Low);
    }

    #[test]
    fn test_top_communities_truncated() {
        let posts = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|c| item(Some(*c), 1))
            .collect();
        let data = RawUserData {
            posts,
            ..Default::default()
        };
        let engagement = analyze_community(&data, 5);
        let engagement = engagement.get().unwrap();
        assert_eq!(engagement.top_communities.len(), 5);
        assert_eq!(engagement.top_communities[0].0, "a");
        assert_eq!(engagement.community_diversity, 7);
    }

    #[test]
    fn test_engagement_levels() {
        assert_eq!(engagement_level(51.0, 21), EngagementLevel::High);
        assert_eq!(engagement_level(51.0, 20), EngagementLevel::Moderate);
        assert_eq!(engagement_level(11.0, 11), EngagementLevel::Moderate);
        assert_eq!(engagement_level(10.0, 100), EngagementLevel::Low);
    }
}
