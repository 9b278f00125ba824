mod utils;

#[cfg(test)]
mod tests {
    use crate::utils::{memory_fs, write_templates};
    use minijinja::Value;
    use page_renderer::{
        fs::{LocalFs, MemoryFs},
        Error, FuncMap, Options, Renderer, ResponseRenderer,
    };
    use serde_json::json;
    use std::sync::Arc;
    use test_log::test;

    /// Request context used by the tests' function map factory.
    #[derive(Debug, Clone, Default)]
    struct Request {
        shout: bool,
        greeting: Option<String>,
    }

    fn request_funcs(ctx: Option<&Request>) -> FuncMap {
        let mut funcs = FuncMap::new();
        let greeting = match ctx {
            None => "base".to_string(),
            Some(ctx) => ctx.greeting.clone().unwrap_or_else(|| "base".to_string()),
        };
        funcs.insert("greeting".into(), Value::from_function(move || greeting.clone()));
        if ctx.is_some_and(|ctx| ctx.shout) {
            funcs.insert(
                "upper".into(),
                Value::from_function(|s: String| s.to_uppercase()),
            );
        }
        funcs
    }

    fn render(
        renderer: &Renderer<Request>,
        name: &str,
        data: serde_json::Value,
        ctx: &Request,
    ) -> String {
        let mut sink = Vec::new();
        renderer.render(&mut sink, name, data, ctx).unwrap();
        String::from_utf8(sink).unwrap()
    }

    fn request_renderer(fs: MemoryFs) -> Renderer<Request> {
        Renderer::new(Options::new(fs).with_include("*.tmpl").with_funcs(request_funcs)).unwrap()
    }

    #[test]
    fn test_hello_world() {
        let fs = memory_fs(&[("home.tmpl", "Hello, {{ Name }}!")]);
        let renderer: Renderer = Renderer::new(Options::new(fs).with_include("*.tmpl")).unwrap();

        let mut sink = Vec::new();
        renderer.render(&mut sink, "home.tmpl", json!({ "Name": "World" }), &()).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_missing_filesystem_is_config_error() {
        let options: Options = Options { include: vec!["*.tmpl".into()], ..Options::default() };
        let err = Renderer::new(options).err().unwrap();
        assert!(matches!(err, Error::MissingFilesystem));
        assert!(err.is_config());
    }

    #[test]
    fn test_empty_include_is_config_error() {
        let options: Options = Options::new(memory_fs(&[("home.tmpl", "")]));
        let err = Renderer::new(options).err().unwrap();
        assert!(matches!(err, Error::NoIncludePatterns));
        assert!(err.is_config());
    }

    #[test]
    fn test_pattern_matching_nothing_fails_construction() {
        let fs = memory_fs(&[("home.tmpl", "")]);
        let options: Options = Options::new(fs).with_include("*.tmpl").with_include("*.html");
        let err = Renderer::new(options).err().unwrap();
        assert!(matches!(err, Error::PatternMatchedNothing { ref pattern } if pattern == "*.html"));
        assert!(err.is_parse());
    }

    #[test]
    fn test_syntax_error_fails_construction() {
        let fs = memory_fs(&[("broken.tmpl", "{% if %}")]);
        let err = Renderer::<()>::new(Options::new(fs).with_include("*.tmpl")).err().unwrap();
        assert!(matches!(err, Error::Parse { ref name, .. } if name == "broken.tmpl"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let fs = memory_fs(&[(
            "list.tmpl",
            "{% for item in items %}<li>{{ item }}</li>{% endfor %}",
        )]);
        let renderer = request_renderer(fs);
        let data = json!({ "items": ["a", "<b>"] });
        let ctx = Request::default();

        let first = render(&renderer, "list.tmpl", data.clone(), &ctx);
        let second = render(&renderer, "list.tmpl", data, &ctx);
        assert_eq!(first, "<li>a</li><li>&lt;b&gt;</li>");
        assert_eq!(first, second);
    }

    #[test]
    fn test_sequential_renders_do_not_share_functions() {
        let fs = memory_fs(&[(
            "page.tmpl",
            "{% if upper is defined %}{{ upper(name) }}{% else %}{{ name }}{% endif %}",
        )]);
        let renderer = request_renderer(fs);
        let data = json!({ "name": "quiet" });

        let shouting = Request { shout: true, ..Request::default() };
        assert_eq!(render(&renderer, "page.tmpl", data.clone(), &shouting), "QUIET");
        assert_eq!(render(&renderer, "page.tmpl", data.clone(), &Request::default()), "quiet");
        assert_eq!(render(&renderer, "page.tmpl", data, &shouting), "QUIET");
    }

    #[test]
    fn test_concurrent_renders_are_isolated() {
        let fs = memory_fs(&[(
            "page.tmpl",
            "{% if upper is defined %}{{ upper(name) }}{% else %}{{ name }}{% endif %}",
        )]);
        let renderer: Arc<Renderer<Request>> = Arc::new(request_renderer(fs));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let renderer = Arc::clone(&renderer);
                    scope.spawn(move || {
                        let ctx = Request { shout: i % 2 == 0, ..Request::default() };
                        let mut sink = Vec::new();
                        renderer
                            .render(&mut sink, "page.tmpl", json!({ "name": "mixed" }), &ctx)
                            .unwrap();
                        (ctx.shout, String::from_utf8(sink).unwrap())
                    })
                })
                .collect();

            for handle in handles {
                let (shout, out) = handle.join().unwrap();
                assert_eq!(out, if shout { "MIXED" } else { "mixed" });
            }
        });
    }

    #[test]
    fn test_request_function_overrides_startup_function() {
        let fs = memory_fs(&[("hello.tmpl", "{{ greeting() }}")]);
        let renderer = request_renderer(fs);

        let ctx = Request { greeting: Some("request".into()), ..Request::default() };
        assert_eq!(render(&renderer, "hello.tmpl", json!({}), &ctx), "request");
        assert_eq!(render(&renderer, "hello.tmpl", json!({}), &Request::default()), "base");
    }

    #[test]
    fn test_missing_function_is_execution_error() {
        let fs = memory_fs(&[("call.tmpl", "before {{ missing_func() }} after")]);
        let renderer: Renderer = Renderer::new(Options::new(fs).with_include("*.tmpl")).unwrap();

        let mut sink = Vec::new();
        let err = renderer.render(&mut sink, "call.tmpl", json!({}), &()).unwrap_err();
        assert!(err.is_execute(), "unexpected error: {err}");
        // Output produced before the failure stays in the sink.
        assert_eq!(String::from_utf8_lossy(&sink), "before ");
    }

    #[test]
    fn test_shared_templates_are_includable() {
        let fs = memory_fs(&[
            ("shared/header.tmpl", "<h1>{{ title }}</h1>"),
            ("shared/footer.tmpl", "<footer>{% include 'shared/copyright.tmpl' %}</footer>"),
            ("shared/copyright.tmpl", "(c)"),
            (
                "home.tmpl",
                "{% include 'shared/header.tmpl' %}<p>home</p>{% include 'shared/footer.tmpl' %}",
            ),
            ("about.tmpl", "{% include 'shared/header.tmpl' %}"),
        ]);
        let renderer: Renderer = Renderer::new(
            Options::new(fs).with_include("shared/*.tmpl").with_include("*.tmpl"),
        )
        .unwrap();

        assert_eq!(
            renderer.template_names(),
            [
                "about.tmpl",
                "home.tmpl",
                "shared/copyright.tmpl",
                "shared/footer.tmpl",
                "shared/header.tmpl"
            ]
        );
        let out =
            renderer.render_to_string("home.tmpl", json!({ "title": "Home" }), &()).unwrap();
        assert_eq!(out, "<h1>Home</h1><p>home</p><footer>(c)</footer>");
        let out =
            renderer.render_to_string("about.tmpl", json!({ "title": "About" }), &()).unwrap();
        assert_eq!(out, "<h1>About</h1>");
    }

    #[test]
    fn test_render_rereads_template_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path(), &[("home.tmpl", "v1 {{ n }}")]);
        let renderer: Renderer =
            Renderer::new(Options::new(LocalFs::new(dir.path())).with_include("*.tmpl")).unwrap();
        assert_eq!(renderer.render_to_string("home.tmpl", json!({ "n": 1 }), &()).unwrap(), "v1 1");

        write_templates(dir.path(), &[("home.tmpl", "v2 {{ n }}")]);
        assert_eq!(renderer.render_to_string("home.tmpl", json!({ "n": 2 }), &()).unwrap(), "v2 2");
        // The base set keeps the source parsed at startup.
        assert_eq!(
            renderer.environment().get_template("home.tmpl").unwrap().source(),
            "v1 {{ n }}"
        );
    }

    #[test]
    fn test_non_utf8_template_fails_construction_as_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path(), &[("home.tmpl", "ok")]);
        std::fs::write(dir.path().join("binary.tmpl"), [0xff, 0xfe]).unwrap();

        let options: Options = Options::new(LocalFs::new(dir.path())).with_include("*.tmpl");
        let err = Renderer::new(options).err().unwrap();
        assert!(matches!(
            err,
            Error::InvalidTemplateEncoding { ref name } if name == "binary.tmpl"
        ));
        assert!(err.is_parse());
    }

    #[test]
    fn test_render_time_syntax_error_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path(), &[("home.tmpl", "ok")]);
        let renderer: Renderer =
            Renderer::new(Options::new(LocalFs::new(dir.path())).with_include("*.tmpl")).unwrap();

        write_templates(dir.path(), &[("home.tmpl", "{% for %}")]);
        let err = renderer.render_to_string("home.tmpl", json!({}), &()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn test_render_unknown_template_is_not_found() {
        let fs = memory_fs(&[("home.tmpl", "")]);
        let renderer: Renderer = Renderer::new(Options::new(fs).with_include("*.tmpl")).unwrap();
        let err = renderer.render_to_string("nope.tmpl", json!({}), &()).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { ref name } if name == "nope.tmpl"));
        assert!(err.is_parse());
    }

    #[test]
    fn test_render_template_outside_include_set() {
        let fs = memory_fs(&[
            ("home.tmpl", "home"),
            ("partials/card.html", "{% include 'home.tmpl' %} card"),
        ]);
        let renderer: Renderer = Renderer::new(Options::new(fs).with_include("*.tmpl")).unwrap();
        assert_eq!(renderer.template_names(), ["home.tmpl"]);
        assert_eq!(
            renderer.render_to_string("partials/card.html", json!({}), &()).unwrap(),
            "home card"
        );
    }
}
