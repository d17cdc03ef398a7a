/// Macro for model field updates with automatic rendering.
/// Renders only when at least one field actually changed.
///
/// # Examples
///
/// ```ignore
/// update_field!(model.redirect_to, None)
/// ```
#[macro_export]
macro_rules! update_field {
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// GET against a device endpoint with the current credential attached.
///
/// The `Authorization` header is added only when a credential is present;
/// without one the request goes out unauthenticated and the device answers
/// `401`, which the response processing converts into a forced sign-out.
///
/// # Example
/// ```ignore
/// authorized_get!(model, WIFI_STATUS_ENDPOINT, |result| {
///     Event::Wifi(WifiEvent::StatusLoaded(process_resource_response(result)))
/// })
/// ```
#[macro_export]
macro_rules! authorized_get {
    ($model:expr, $endpoint:expr, $map:expr) => {{
        let request = $crate::HttpCmd::get($crate::build_url($endpoint));
        let request = match $model.credential.as_deref() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        };
        request.build().then_send($map)
    }};
}

/// POST without a body (restart, factory reset), credential attached when present.
#[macro_export]
macro_rules! authorized_post {
    ($model:expr, $endpoint:expr, $map:expr) => {{
        let request = $crate::HttpCmd::post($crate::build_url($endpoint));
        let request = match $model.credential.as_deref() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        };
        request.build().then_send($map)
    }};
}

/// POST with a JSON body, credential attached when present.
///
/// Produces a complete command (including render); a body serialization
/// failure becomes an error notification instead of a request.
#[macro_export]
macro_rules! authorized_post_json {
    ($model:expr, $endpoint:expr, $body:expr, $map:expr) => {{
        let request = $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json");
        let request = match $model.credential.as_deref() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        };
        match request.body_json($body) {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send($map),
            ]),
            Err(e) => $model.error_and_render(format!("Failed to serialize request: {e}")),
        }
    }};
}

/// Load one REST resource into its [`ResourceState`] field.
///
/// Clears any stale data and error, flags the load in progress and issues
/// the authorized GET; the mapped response event finishes the cycle through
/// `update::resource::finish_load`.
#[macro_export]
macro_rules! load_resource {
    ($model:expr, $field:ident, $endpoint:expr, $domain:ident, $domain_event:ident, $response_event:ident) => {{
        $model.$field.start_load();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::authorized_get!($model, $endpoint, |result| {
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    $crate::http_helpers::process_resource_response(result),
                ))
            }),
        ])
    }};
}

/// Submit the in-memory representation of one REST resource.
///
/// The current `data` is the request body; saving before anything was
/// loaded (or after a failed load) is rejected locally.
#[macro_export]
macro_rules! save_resource {
    ($model:expr, $field:ident, $endpoint:expr, $domain:ident, $domain_event:ident, $response_event:ident) => {{
        match $model.$field.data.clone() {
            Some(body) => {
                $model.$field.start_save();
                $crate::authorized_post_json!($model, $endpoint, &body, |result| {
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        $crate::http_helpers::process_resource_response(result),
                    ))
                })
            }
            None => $model.error_and_render("No data to save.".to_string()),
        }
    }};
}
