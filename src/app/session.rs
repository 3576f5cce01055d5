use crate::adapters::PageContainer;
use crate::core::controller::Controller;
use crate::core::loader::LoadHandle;
use crate::domain::ports::{Alerter, Container, InputField};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// One line of interactive input: `:quit`/`:q` stops, `:reset` fires reset, anything
/// else is typed into the input field and fires search.
pub fn handle_line<C, I, A>(controller: &mut Controller<C, I, A>, line: &str) -> Flow
where
    C: Container,
    I: InputField,
    A: Alerter,
{
    match line.trim() {
        ":quit" | ":q" => return Flow::Stop,
        ":reset" => controller.on_reset(),
        _ => {
            controller.input_mut().set_value(line);
            controller.on_search();
        }
    }
    Flow::Continue
}

pub fn render_output(container: &PageContainer, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(format!("{}\n", container.to_html()?)),
        OutputFormat::Text => Ok(container.to_text()),
    }
}

/// Waits for the startup load to settle, then searches each query in turn and returns
/// the rendered container after every search.
pub async fn run_queries<I, A>(
    controller: &mut Controller<PageContainer, I, A>,
    load: LoadHandle,
    queries: &[String],
    format: OutputFormat,
) -> Result<Vec<String>>
where
    I: InputField,
    A: Alerter,
{
    load.wait().await;

    let mut outputs = Vec::with_capacity(queries.len());
    for query in queries {
        controller.input_mut().set_value(query);
        controller.on_search();
        outputs.push(render_output(controller.container(), format)?);
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{RecordingAlerter, TextInput};
    use crate::core::controller::EMPTY_QUERY_ALERT;
    use crate::core::loader::Loader;
    use crate::core::store::DataStore;
    use crate::domain::model::{Dataset, Place};
    use crate::domain::ports::DataSource;
    use async_trait::async_trait;

    type TestPage = Controller<PageContainer, TextInput, RecordingAlerter>;

    struct MemorySource(&'static str);

    #[async_trait]
    impl DataSource for MemorySource {
        async fn fetch(&self) -> Result<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }

        fn location(&self) -> &str {
            "memory"
        }
    }

    fn page(store: DataStore) -> TestPage {
        Controller::new(
            store,
            PageContainer::new("recommendations-container"),
            TextInput::default(),
            RecordingAlerter::default(),
        )
    }

    fn loaded_page() -> TestPage {
        let store = DataStore::new();
        store.replace(Dataset {
            beaches: vec![Place::new("Bora Bora", "sandy beach", "b")],
            ..Default::default()
        });
        page(store)
    }

    #[test]
    fn test_plain_line_searches() {
        let mut page = loaded_page();

        assert_eq!(handle_line(&mut page, "beach"), Flow::Continue);
        assert_eq!(page.container().card_names(), vec!["Bora Bora"]);
        assert_eq!(page.input().value(), "beach");
    }

    #[test]
    fn test_reset_command_clears_state() {
        let mut page = loaded_page();
        handle_line(&mut page, "beach");

        assert_eq!(handle_line(&mut page, ":reset"), Flow::Continue);
        assert_eq!(page.input().value(), "");
        assert!(!page.container().is_visible());
        assert!(page.container().is_empty());
        assert!(page.alerter().alerts().is_empty());
    }

    #[test]
    fn test_quit_command_stops() {
        let mut page = loaded_page();
        handle_line(&mut page, "beach");

        assert_eq!(handle_line(&mut page, ":quit"), Flow::Stop);
        assert_eq!(handle_line(&mut page, "  :q "), Flow::Stop);
        assert_eq!(page.container().card_names(), vec!["Bora Bora"]);
    }

    #[test]
    fn test_blank_line_alerts() {
        let mut page = loaded_page();
        handle_line(&mut page, "beach");

        assert_eq!(handle_line(&mut page, "   "), Flow::Continue);
        assert_eq!(page.alerter().alerts(), &[EMPTY_QUERY_ALERT.to_string()]);
        assert!(!page.container().is_visible());
        assert!(page.container().is_empty());
    }

    #[tokio::test]
    async fn test_run_queries_waits_for_load() {
        let json = r#"{
            "countries": [
                {"name": "Japan", "cities": [
                    {"name": "Tokyo", "description": "busy city", "imageUrl": "tokyo.jpg"}
                ]}
            ]
        }"#;
        let mut page = page(DataStore::new());
        let load = page.on_startup(Loader::new(MemorySource(json)));

        let outputs = run_queries(
            &mut page,
            load,
            &["City".to_string(), "zzz-nomatch".to_string()],
            OutputFormat::Text,
        )
        .await
        .unwrap();

        assert_eq!(
            outputs,
            vec![
                "* Tokyo\n  busy city\n  [tokyo.jpg]\n".to_string(),
                "No recommendations found.\n".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_run_queries_html_output() {
        let mut page = page(DataStore::new());
        let load = page.on_startup(Loader::new(MemorySource(r#"{"temples": []}"#)));

        let outputs = run_queries(&mut page, load, &["temple".to_string()], OutputFormat::Html)
            .await
            .unwrap();

        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].contains("style=\"display: flex\""));
        assert!(outputs[0].contains("<p class=\"no-results\">No recommendations found.</p>"));
        assert!(outputs[0].ends_with("</div>\n"));
    }
}
