mod another_page;
mod home;
mod second_page;

pub use another_page::AnotherPage;
pub use home::Home;
pub use second_page::SecondPage;
