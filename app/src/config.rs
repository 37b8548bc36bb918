use clap::Parser;
use posts_core::{PostsClient, DEFAULT_BASE_URL, DEFAULT_IMAGE_URL};

#[derive(Debug, Parser)]
#[command(name = "posts-app", about = "Fetch posts and bind the placeholder image on page load")]
pub struct Cli {
    /// Base URL of the posts service; `/posts` is appended.
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "POSTS_BASE_URL")]
    pub base_url: String,

    /// URL of the image bound on page load.
    #[arg(long, default_value = DEFAULT_IMAGE_URL, env = "POSTS_IMAGE_URL")]
    pub image_url: String,

    /// Fetch the post list and log every record.
    #[arg(long)]
    pub list: bool,

    /// Submit the demo post and log the acknowledgment.
    #[arg(long)]
    pub submit: bool,
}

impl Cli {
    pub fn client(&self) -> PostsClient {
        PostsClient::new(&self.base_url, &self.image_url)
    }
}
