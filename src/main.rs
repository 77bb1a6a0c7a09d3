#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{App as Server, HttpServer, middleware::Compress, web};
    use leptos::config::get_configuration;
    use leptos_actix::{LeptosRoutes, generate_route_list};
    use log::info;
    use productnav::app::{App, shell};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;
    info!("Serving productnav on http://{addr}");

    HttpServer::new(move || {
        let routes = generate_route_list(App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.to_string();

        Server::new()
            .wrap(Compress::default())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options.to_owned()))
            .service(Files::new("/", site_root))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(all(feature = "csr", not(feature = "ssr")))]
fn main() {
    productnav::init_browser_logging();
    leptos::mount::mount_to_body(productnav::app::App);
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
fn main() {
    // Built as a library for hydration; see `cargo leptos serve`.
}
