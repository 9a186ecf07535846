use serde::{Deserialize, Serialize};

/// One ranked match from the `/match/me` stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub opportunity_id: String,
    pub title: String,
    pub score: f64,
}

impl MatchEntry {
    /// Parse the match endpoint's event-stream body.
    ///
    /// The backend emits one `data: <id>|<title>|<score>` line per ranked
    /// opportunity. Malformed lines are skipped rather than failing the
    /// whole stream.
    pub fn parse_stream(body: &str) -> Vec<MatchEntry> {
        body.lines()
            .filter_map(|line| {
                let line = line.trim();
                let payload = line.strip_prefix("data:").unwrap_or(line).trim();
                if payload.is_empty() {
                    return None;
                }
                let mut parts = payload.splitn(3, '|');
                let id = parts.next()?.trim();
                let title = parts.next()?.trim();
                let score = parts.next()?.trim().parse::<f64>().ok()?;
                if id.is_empty() || title.is_empty() {
                    return None;
                }
                Some(MatchEntry {
                    opportunity_id: id.to_string(),
                    title: title.to_string(),
                    score,
                })
            })
            .collect()
    }

    /// Similarity score as a percentage for display.
    pub fn score_display(&self) -> String {
        format!("{:.0}%", (self.score.clamp(0.0, 1.0)) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stream_lines() {
        let body = "data: abc-1|Community garden|0.91\n\ndata: abc-2|River cleanup|0.84\n\n";
        let matches = MatchEntry::parse_stream(body);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].title, "Community garden");
        assert_eq!(matches[0].score_display(), "91%");
        assert_eq!(matches[1].opportunity_id, "abc-2");
    }

    #[test]
    fn test_parse_stream_skips_malformed_lines() {
        let body = "data: only-two-fields|oops\nnoise\ndata: ok|Title|0.5\ndata: |no id|0.5";
        let matches = MatchEntry::parse_stream(body);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].opportunity_id, "ok");
    }

    #[test]
    fn test_parse_stream_accepts_bare_lines() {
        // Some deployments front the stream with a proxy that strips the
        // SSE framing; the payload itself is still pipe-separated.
        let matches = MatchEntry::parse_stream("abc|Food bank|0.72");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 0.72);
    }

    #[test]
    fn test_score_display_clamps_out_of_range() {
        let entry = MatchEntry {
            opportunity_id: "x".to_string(),
            title: "t".to_string(),
            score: -1.0,
        };
        assert_eq!(entry.score_display(), "0%");
    }
}
