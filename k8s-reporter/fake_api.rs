use http::{HeaderValue, Request, Response, StatusCode, header::CONTENT_TYPE};
use k8s_openapi::serde_json::{Value, json};
use kube::Client;
use kube::client::Body;
use std::convert::Infallible;
use std::sync::Arc;

/// In-memory kubernetes API server that answers list and get requests for stored resource types.\
/// **Note** that object's resource is guessed from its kind, e.g. `Pod` is served as `pods`,
/// and only resource types of the stored objects are known to the server.
pub struct FakeApi {
    objects: Vec<Value>,
    failure: Option<StatusCode>,
}

impl FakeApi {
    /// Creates new [`FakeApi`] instance that serves provided `objects`.
    pub fn new(objects: Vec<Value>) -> Self {
        Self { objects, failure: None }
    }

    /// Creates new [`FakeApi`] instance that answers every request with the `failure` status.
    pub fn failing(failure: StatusCode) -> Self {
        Self {
            objects: Vec::new(),
            failure: Some(failure),
        }
    }

    /// Returns kubernetes [`Client`] connected to this fake API.\
    /// **Note** that it must be called within the tokio runtime.
    pub fn into_client(self) -> Client {
        let api = Arc::new(self);
        let service = tower::service_fn(move |request: Request<Body>| {
            let api = Arc::clone(&api);
            async move { Ok::<_, Infallible>(api.handle(&request)) }
        });

        Client::new(service, "default")
    }

    fn handle(&self, request: &Request<Body>) -> Response<String> {
        if let Some(failure) = self.failure {
            return status_response(failure, "request failed");
        }

        let Some(route) = Route::parse(request.uri().path()) else {
            return status_response(StatusCode::NOT_FOUND, "the server could not find the requested resource");
        };

        let Some(kind) = self.objects.iter().find(|o| route.serves(o)).map(|o| &o["kind"]) else {
            return status_response(StatusCode::NOT_FOUND, "the server could not find the requested resource");
        };

        let selector = request.uri().query().and_then(label_selector);
        let mut matching = self
            .objects
            .iter()
            .filter(|o| route.matches(o) && selector.as_ref().is_none_or(|s| has_labels(o, s)));

        match route.name {
            Some(name) => match matching.find(|o| o["metadata"]["name"] == name) {
                Some(object) => json_response(StatusCode::OK, object),
                None => status_response(StatusCode::NOT_FOUND, &format!("{} \"{}\" not found", route.resource, name)),
            },
            None => {
                let items = matching.map(without_type_meta).collect::<Vec<_>>();
                let list = json!({
                    "apiVersion": route.api_version(),
                    "kind": format!("{}List", kind.as_str().unwrap_or_default()),
                    "metadata": { "resourceVersion": "" },
                    "items": items,
                });
                json_response(StatusCode::OK, &list)
            },
        }
    }
}

/// Returns copy of the object without `apiVersion` and `kind`, the way API server sends list items.
fn without_type_meta(object: &Value) -> Value {
    let mut object = object.clone();
    if let Some(map) = object.as_object_mut() {
        map.remove("apiVersion");
        map.remove("kind");
    }

    object
}

/// Creates unstructured kubernetes object.
pub fn unstructured(api_version: &str, kind: &str, namespace: &str, name: &str) -> Value {
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {
            "namespace": namespace,
            "name": name,
        },
    })
}

/// Creates unstructured kubernetes object with the specified `labels`.
pub fn labeled(api_version: &str, kind: &str, namespace: &str, name: &str, labels: &[(&str, &str)]) -> Value {
    let mut object = unstructured(api_version, kind, namespace, name);
    object["metadata"]["labels"] = labels
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    object
}

/// Parsed kubernetes REST API path.
struct Route<'a> {
    group: &'a str,
    version: &'a str,
    namespace: Option<&'a str>,
    resource: &'a str,
    name: Option<&'a str>,
}

impl<'a> Route<'a> {
    fn parse(path: &'a str) -> Option<Self> {
        let segments = path.trim_matches('/').split('/').collect::<Vec<_>>();
        let (group, version, rest) = match segments.as_slice() {
            ["api", version, rest @ ..] => ("", *version, rest),
            ["apis", group, version, rest @ ..] => (*group, *version, rest),
            _ => return None,
        };

        let (namespace, rest) = match rest {
            ["namespaces", namespace, rest @ ..] if !rest.is_empty() => (Some(*namespace), rest),
            _ => (None, rest),
        };

        let (resource, name) = match rest {
            [resource] => (*resource, None),
            [resource, name] => (*resource, Some(*name)),
            _ => return None,
        };

        Some(Self {
            group,
            version,
            namespace,
            resource,
            name,
        })
    }

    fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.to_owned()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// Returns `true` if the object is of the resource type this route points to.
    fn serves(&self, object: &Value) -> bool {
        let api_version = object["apiVersion"].as_str().unwrap_or_default();
        let kind = object["kind"].as_str().unwrap_or_default();

        api_version == self.api_version() && guess_resource(kind) == self.resource
    }

    fn matches(&self, object: &Value) -> bool {
        let namespace = object["metadata"]["namespace"].as_str().unwrap_or_default();
        self.serves(object) && self.namespace.is_none_or(|ns| ns == namespace)
    }
}

/// Guesses plural resource name from the object's kind.
fn guess_resource(kind: &str) -> String {
    let kind = kind.to_lowercase();
    if kind.ends_with('s') {
        format!("{kind}es")
    } else if let Some(stem) = kind.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{kind}s")
    }
}

/// Extracts equality based label selector from the request query.
fn label_selector(query: &str) -> Option<Vec<(String, String)>> {
    let value = query.split('&').find_map(|p| p.strip_prefix("labelSelector="))?;
    let value = value.replace("%3D", "=").replace("%2C", ",");

    Some(
        value
            .split(',')
            .filter_map(|s| s.split_once('='))
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
    )
}

fn has_labels(object: &Value, selector: &[(String, String)]) -> bool {
    selector
        .iter()
        .all(|(k, v)| object["metadata"]["labels"][k].as_str() == Some(v.as_str()))
}

fn json_response(status: StatusCode, body: &Value) -> Response<String> {
    let mut response = Response::new(body.to_string());
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn status_response(status: StatusCode, message: &str) -> Response<String> {
    let reason = match status {
        StatusCode::NOT_FOUND => "NotFound",
        StatusCode::FORBIDDEN => "Forbidden",
        _ => "InternalError",
    };

    let body = json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": status.as_u16(),
    });

    json_response(status, &body)
}
