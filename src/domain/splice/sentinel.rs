/// Comment pair marking a region inserted by remix-pwa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    id: &'static str,
}

/// Service-worker navigation effect in the root layout.
pub const NAVIGATION: Sentinel = Sentinel { id: "navigation" };
/// Service-worker registration in the client entry.
pub const WORKER_REGISTRATION: Sentinel = Sentinel { id: "worker-registration" };
/// Push subscription bootstrap in the client entry.
pub const PUSH_SUBSCRIPTION: Sentinel = Sentinel { id: "push-subscription" };

impl Sentinel {
    pub fn begin(&self) -> String {
        format!("// remix-pwa:begin {}", self.id)
    }

    pub fn end(&self) -> String {
        format!("// remix-pwa:end {}", self.id)
    }

    pub fn is_present(&self, source: &str) -> bool {
        source.contains(&self.begin())
    }

    /// Render `fragment` between the begin/end markers, every non-blank line prefixed by `indent`.
    pub fn wrap(&self, fragment: &str, indent: &str) -> String {
        let mut out = String::new();
        out.push_str(indent);
        out.push_str(&self.begin());
        out.push('\n');
        for line in fragment.trim_start_matches(['\r', '\n']).trim_end().lines() {
            if !line.trim().is_empty() {
                out.push_str(indent);
                out.push_str(line);
            }
            out.push('\n');
        }
        out.push_str(indent);
        out.push_str(&self.end());
        out.push('\n');
        out
    }
}
