use crate::core::view::GreetingView;
use crate::domain::ports::BackendClient;

/// Drives the root view the way a UI framework would: render what is
/// there, process the settlement event, render again.
pub struct App {
    view: GreetingView,
}

impl App {
    pub fn mount<B: BackendClient + 'static>(client: B) -> Self {
        Self {
            view: GreetingView::mount(client),
        }
    }

    /// Runs the view to settlement and returns the final displayed text.
    pub async fn run(mut self) -> String {
        println!("{}", self.view.render());

        self.view.settle().await;

        println!("{}", self.view.render());
        self.view.render().to_string()
    }
}
