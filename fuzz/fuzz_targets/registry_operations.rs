#![no_main]

use ioc_registry::{DuplicatePolicy, Inject, IocError, RegistryConfig, ServiceRegistry};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

const NODES: usize = 4;

#[derive(Default)]
struct Node<const N: usize> {
    depth: usize,
}

impl<const N: usize, const M: usize> Inject<Node<M>> for Node<N> {
    fn inject(dependency: Arc<Node<M>>) -> Self {
        Node { depth: dependency.depth + 1 }
    }
}

fn register_node<const N: usize>(registry: &mut ServiceRegistry, dependency: Option<usize>) {
    match dependency {
        None => registry.register_service::<Node<N>, Node<N>>(),
        Some(0) => registry.register_service_with::<Node<N>, Node<N>, Node<0>>(),
        Some(1) => registry.register_service_with::<Node<N>, Node<N>, Node<1>>(),
        Some(2) => registry.register_service_with::<Node<N>, Node<N>, Node<2>>(),
        _ => registry.register_service_with::<Node<N>, Node<N>, Node<3>>(),
    }
}

fn register(registry: &mut ServiceRegistry, node: usize, dependency: Option<usize>) {
    match node {
        0 => register_node::<0>(registry, dependency),
        1 => register_node::<1>(registry, dependency),
        2 => register_node::<2>(registry, dependency),
        _ => register_node::<3>(registry, dependency),
    }
}

fn remove(registry: &mut ServiceRegistry, node: usize) {
    match node {
        0 => registry.remove_service::<Node<0>>(),
        1 => registry.remove_service::<Node<1>>(),
        2 => registry.remove_service::<Node<2>>(),
        _ => registry.remove_service::<Node<3>>(),
    }
}

fn resolve(registry: &ServiceRegistry, node: usize) -> Result<usize, IocError> {
    match node {
        0 => registry.get_service::<Node<0>>().map(|n| n.depth),
        1 => registry.get_service::<Node<1>>().map(|n| n.depth),
        2 => registry.get_service::<Node<2>>().map(|n| n.depth),
        _ => registry.get_service::<Node<3>>().map(|n| n.depth),
    }
}

/// Reference resolution over the modelled registrations.
fn model(graph: &[Option<Option<usize>>; NODES], start: usize) -> Result<usize, &'static str> {
    let mut chain = Vec::new();
    let mut current = start;
    loop {
        let dependency = graph[current].ok_or("ServiceNotAvailable")?;
        if chain.contains(&current) {
            return Err("CircularDependency");
        }
        chain.push(current);
        match dependency {
            None => return Ok(chain.len() - 1),
            Some(next) => current = next,
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };

    let policy = if first % 2 == 0 {
        DuplicatePolicy::KeepFirst
    } else {
        DuplicatePolicy::Replace
    };
    let mut registry = ServiceRegistry::with_config(RegistryConfig::default().duplicate_policy(policy));
    let mut graph: [Option<Option<usize>>; NODES] = [None; NODES];

    for &op in ops {
        let node = (usize::from(op) >> 2) % NODES;
        let target = (usize::from(op) >> 4) % (NODES + 1);
        match op % 4 {
            0 | 1 => {
                let dependency = if target == NODES { None } else { Some(target) };
                register(&mut registry, node, dependency);
                if graph[node].is_none() || policy == DuplicatePolicy::Replace {
                    graph[node] = Some(dependency);
                }
            }
            2 => {
                remove(&mut registry, node);
                graph[node] = None;
            }
            _ => {
                let observed = resolve(&registry, node).map_err(|e| e.identifier());
                assert_eq!(observed, model(&graph, node));
            }
        }
    }

    let report = registry.validate();
    let failing = (0..NODES)
        .filter(|&node| graph[node].is_some() && model(&graph, node).is_err())
        .count();
    assert_eq!(report.errors.len(), failing);
});
