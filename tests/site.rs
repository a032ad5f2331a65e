use std::fs;

use pit_blog::Blog;
use tempfile::TempDir;

fn write_post(blog: &Blog, name: &str, body: &str) {
    fs::create_dir_all(&blog.content_dir).unwrap();
    fs::write(blog.content_dir.join(name), body).unwrap();
}

#[test]
fn test_build_site_from_content_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("_config.yml"),
        "title: PiT Test\nlatest_count: 1\n",
    )
    .unwrap();
    let blog = Blog::new(dir.path()).unwrap();

    write_post(
        &blog,
        "hello-world.md",
        "---\ntitle: \"Hello World\"\ncategory: Research\nfeatured: true\ndate: 2025-01-15\n---\nBody text here.",
    );
    write_post(
        &blog,
        "regimes.md",
        "---\ntitle: Market Regimes\ncategory: Research\ndate: 2025-01-10\nreadTime: 6 min read\nnotes pinned\n---\n## Setup\n\nDetails.\n",
    );
    write_post(
        &blog,
        "quickstart.md",
        "---\ntitle: Quickstart\ncategory: Tutorial\ndate: 2025-01-12\n---\nSteps.\n",
    );
    write_post(&blog, "scratch.md", "No metadata, just text.\n");

    let index = blog.posts().unwrap();
    let slugs: Vec<_> = index.all().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["hello-world", "quickstart", "regimes", "scratch"]);
    assert_eq!(index.featured().unwrap().title, "Hello World");
    assert_eq!(index.get_by_slug("regimes").unwrap().read_time, "6 min read");
    assert!(index.get_by_slug("Regimes").is_none());

    blog.generate().unwrap();

    let list = fs::read_to_string(blog.public_dir.join("blog/index.html")).unwrap();
    assert!(list.contains("PiT Test"));
    assert!(list.contains("Hello World"));
    assert!(list.contains("All Posts"));

    let page = fs::read_to_string(blog.public_dir.join("blog/regimes/index.html")).unwrap();
    assert!(page.contains("<h2>Setup</h2>"));
    assert!(page.contains("Jan 10, 2025"));
    assert!(page.contains(r#"href="/blog/hello-world/""#));

    assert!(blog.public_dir.join("blog/scratch/index.html").exists());

    blog.clean().unwrap();
    assert!(!blog.public_dir.exists());
}

#[test]
fn test_empty_site() {
    let dir = TempDir::new().unwrap();
    let blog = Blog::new(dir.path()).unwrap();

    let index = blog.posts().unwrap();
    assert!(index.is_empty());
    assert!(index.featured().is_none());
    assert!(index.get_by_slug("anything").is_none());

    blog.generate().unwrap();
    assert!(blog.public_dir.join("blog/index.html").exists());
}
