/*
    * The page renderer: substitutes the environment label and the render
    * timestamp into a constant HTML5 template. Plain string replacement
    * over two placeholders; everything else is fixed copy and styling.
*/

const ENVIRONMENT_PLACEHOLDER: &str = "{{environment}}";
const TIMESTAMP_PLACEHOLDER: &str = "{{timestamp}}";

// The title stays constant so the substituted label appears exactly once.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Deployment Test</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
            color: #333;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            background-color: white;
            padding: 20px;
            border-radius: 5px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 {
            color: #2c3e50;
        }
        .environment {
            display: inline-block;
            padding: 5px 10px;
            background-color: #e74c3c;
            color: white;
            border-radius: 3px;
            font-weight: bold;
        }
        .timestamp {
            color: #7f8c8d;
            margin-top: 20px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Deployment Test</h1>
        <p>This page confirms that the deployment to the <span class="environment">{{environment}}</span> environment was successful.</p>

        <p>This is a test page created to verify that our deployment process is working correctly. If you can see this page, it means:</p>

        <ul>
            <li>The code was successfully deployed to the server</li>
            <li>The web server is correctly configured</li>
            <li>The DNS settings are properly set up</li>
        </ul>

        <p class="timestamp">Page generated at: {{timestamp}}</p>
    </div>
</body>
</html>
"#;

/// Renders the complete verification document. Any label and any timestamp
/// string produce a full page; the inputs are not validated or escaped
/// (both come from deploy-time configuration and the clock, not users).
pub fn render_page(environment: &str, timestamp: &str) -> String {
    PAGE_TEMPLATE
        .replace(ENVIRONMENT_PLACEHOLDER, environment)
        .replace(TIMESTAMP_PLACEHOLDER, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED_TIMESTAMP: &str = "2024-01-01 00:00:00";

    #[test]
    fn substitutes_label_and_timestamp_exactly_once() {
        let html: String = render_page("STAGING", FIXED_TIMESTAMP);

        assert_eq!(html.matches("STAGING").count(), 1);
        assert_eq!(html.matches(FIXED_TIMESTAMP).count(), 1);
    }

    #[test]
    fn leaves_no_placeholders_in_the_output() {
        let html: String = render_page("STAGING", FIXED_TIMESTAMP);

        assert!(!html.contains(ENVIRONMENT_PLACEHOLDER));
        assert!(!html.contains(TIMESTAMP_PLACEHOLDER));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn renders_a_well_formed_html5_document() {
        let html: String = render_page("STAGING", FIXED_TIMESTAMP);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<html").count(), 1);
        assert_eq!(html.matches("</html>").count(), 1);
        assert_eq!(html.matches("<body>").count(), 1);
        assert_eq!(html.matches("</body>").count(), 1);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn renders_a_complete_document_when_the_clock_falls_back() {
        use crate::utils::clock::FALLBACK_TIMESTAMP;

        let html: String = render_page("STAGING", FALLBACK_TIMESTAMP);

        assert_eq!(html.matches(FALLBACK_TIMESTAMP).count(), 1);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn renders_any_configured_label() {
        let html: String = render_page("PRODUCTION", FIXED_TIMESTAMP);

        assert_eq!(html.matches("PRODUCTION").count(), 1);
        assert!(!html.contains("STAGING"));
    }
}
