//! Test fixtures and constants.

/// Cloud id of a real-shaped deployment, with label.
pub const DEMO_CLOUD_ID: &str = "demo:ZXVyb3BlLXdlc3QxLmdjcC5jbG91ZC5lcy5pbyQ0MWY3YjUwOWZiMzM0NzJjODNiYjdmNzYyZDlmYTQ4NyQzOWQ5OGIzODhlMTk0MDI1ODg4NTU4NzgwZWFmMjY2Yg==";

/// Primary endpoint of [`DEMO_CLOUD_ID`].
pub const DEMO_PRIMARY: &str =
    "https://41f7b509fb33472c83bb7f762d9fa487.europe-west1.gcp.cloud.es.io:443";

/// Secondary endpoint of [`DEMO_CLOUD_ID`].
pub const DEMO_SECONDARY: &str =
    "https://39d98b388e194025888558780eaf266b.europe-west1.gcp.cloud.es.io:443";

/// Cloud auth matching the demo deployment.
pub const DEMO_CLOUD_AUTH: &str = "arthur:test123";

/// base64("domain:9200$svcA$svcB:9201")
pub const CASCADE_PAYLOAD: &str = "ZG9tYWluOjkyMDAkc3ZjQSRzdmNCOjkyMDE=";

/// base64("example.com$es")
pub const TWO_FIELD_PAYLOAD: &str = "ZXhhbXBsZS5jb20kZXM=";

/// Config file with every section filled in.
pub const FULL_CONFIG: &str = r#"
[cloud]
id = "demo:ZXVyb3BlLXdlc3QxLmdjcC5jbG91ZC5lcy5pbyQ0MWY3YjUwOWZiMzM0NzJjODNiYjdmNzYyZDlmYTQ4NyQzOWQ5OGIzODhlMTk0MDI1ODg4NTU4NzgwZWFmMjY2Yg=="
auth = "arthur:test123"

[index]
name = "test"
timeout_secs = 30

[index.params]
refresh = "true"
"#;
