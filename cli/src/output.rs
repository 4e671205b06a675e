use serde_json::json;
use word_ladder_core::EngineStats;

pub fn path(words: &[String], as_json: bool) -> String {
    if as_json {
        return json!({
            "path": words,
            "distance": words.len().saturating_sub(1),
        })
        .to_string();
    }
    words.join(" -> ")
}

pub fn distance(from: &str, to: &str, distance: usize, as_json: bool) -> String {
    if as_json {
        return json!({ "from": from, "to": to, "distance": distance }).to_string();
    }
    distance.to_string()
}

pub fn neighborhood(found: &[(String, u32)], as_json: bool) -> String {
    if as_json {
        let rows: Vec<_> = found
            .iter()
            .map(|(word, d)| json!({ "word": word, "distance": d }))
            .collect();
        return serde_json::Value::Array(rows).to_string();
    }
    found
        .iter()
        .map(|(word, d)| format!("{d:>3}  {word}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stats(stats: &EngineStats, as_json: bool) -> String {
    if as_json {
        return json!({
            "vertex_count": stats.vertex_count,
            "edge_count": stats.edge_count,
            "graph_memory_bytes": stats.graph_memory_bytes,
            "precomputed": stats.precomputed,
            "reachable_pairs": stats.reachable_pairs,
            "index_memory_bytes": stats.index_memory_bytes,
            "precompute_ms": stats.precompute_ms,
        })
        .to_string();
    }

    let mut lines = vec![
        format!("vertices:        {}", stats.vertex_count),
        format!("edges:           {}", stats.edge_count),
        format!(
            "graph memory:    ~{:.1}MB",
            stats.graph_memory_bytes as f64 / 1_048_576.0
        ),
    ];
    match (
        stats.reachable_pairs,
        stats.index_memory_bytes,
        stats.precompute_ms,
    ) {
        (Some(pairs), Some(bytes), Some(ms)) => {
            let mb = bytes as f64 / 1_048_576.0;
            lines.push(format!("reachable pairs: {pairs}"));
            lines.push(format!("index memory:    ~{mb:.1}MB"));
            lines.push(format!("precompute:      {ms:.1}ms"));
        }
        _ => lines.push("index:           not computed".to_string()),
    }
    lines.join("\n")
}
